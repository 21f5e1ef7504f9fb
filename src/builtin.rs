// netparams_registry/src/builtin.rs
// Built-in networks, loaded by NetworkRegistry::with_builtin() in this order.

use crate::chainparams::{
    NetworkSpec, RegtestSpec, REGTEST_MAGIC, REGTEST_PORT, TESTNET_DNS_SEEDS, TESTNET_MAGIC,
    TESTNET_PORT,
};

// BIP32 versions most Bitcoin-derived coins kept.
const BIP32_XPUB: u32 = 0x0488b21e;
const BIP32_XPRV: u32 = 0x0488ade4;

pub const LIVENET_DNS_SEEDS: [&str; 6] = [
    "seed.bitcoin.sipa.be",
    "dnsseed.bluematt.me",
    "dnsseed.bitcoin.dashjr.org",
    "seed.bitcoinstats.com",
    "seed.bitnodes.io",
    "bitseed.xf2.org",
];

fn seeds(hosts: &[&str]) -> Vec<String> {
    hosts.iter().map(|h| h.to_string()).collect()
}

fn describe(name: &str, alias: &str, coin: &str, coin_name: &str, url: &str, algorithm: &str, prefix: &str) -> NetworkSpec {
    NetworkSpec {
        name: name.to_string(),
        alias: alias.to_string(),
        coin: Some(coin.to_string()),
        coin_name: Some(coin_name.to_string()),
        short_name: Some(coin.to_lowercase()),
        url: Some(url.to_string()),
        algorithm: Some(algorithm.to_string()),
        prefix: Some(prefix.to_string()),
        ..Default::default()
    }
}

pub fn builtin_networks() -> Vec<NetworkSpec> {
    vec![
        NetworkSpec {
            pubkeyhash: 0x00,
            privatekey: 0x80,
            scripthash: 0x05,
            xpubkey: BIP32_XPUB,
            xprivkey: BIP32_XPRV,
            network_magic: Some([0xf9, 0xbe, 0xb4, 0xd9].into()),
            port: Some(8333),
            dns_seeds: seeds(&LIVENET_DNS_SEEDS),
            ..describe("livenet", "mainnet", "BTC", "Bitcoin", "https://bitcoin.org", "sha256", "1")
        },
        NetworkSpec {
            pubkeyhash: 0x6f,
            privatekey: 0xef,
            scripthash: 0xc4,
            xpubkey: 0x043587cf,
            xprivkey: 0x04358394,
            network_magic: Some(TESTNET_MAGIC.into()),
            port: Some(TESTNET_PORT),
            dns_seeds: seeds(&TESTNET_DNS_SEEDS),
            regtest: Some(RegtestSpec {
                port: REGTEST_PORT,
                network_magic: REGTEST_MAGIC.into(),
                dns_seeds: Vec::new(),
            }),
            ..describe("testnet", "regtest", "tBTC", "Bitcoin Testnet", "https://bitcoin.org", "sha256", "m")
        },
        NetworkSpec {
            pubkeyhash: 0x30,
            privatekey: 0xb0,
            scripthash: 0x32,
            xpubkey: 0x019da462,
            xprivkey: 0x019d9cfe,
            network_magic: Some([0xfb, 0xc0, 0xb6, 0xdb].into()),
            port: Some(9333),
            dns_seeds: seeds(&[
                "seed-a.litecoin.loshan.co.uk",
                "dnsseed.thrasher.io",
                "dnsseed.litecointools.com",
                "dnsseed.litecoinpool.org",
            ]),
            ..describe("litecoin", "ltc", "LTC", "Litecoin", "https://litecoin.org", "scrypt", "L")
        },
        NetworkSpec {
            pubkeyhash: 0x6f,
            privatekey: 0xef,
            scripthash: 0x3a,
            xpubkey: 0x0436f6e1,
            xprivkey: 0x0436ef7d,
            network_magic: Some([0xfd, 0xd2, 0xc8, 0xf1].into()),
            port: Some(19335),
            dns_seeds: seeds(&[
                "testnet-seed.litecointools.com",
                "seed-b.litecoin.loshan.co.uk",
            ]),
            ..describe("ltctest", "tltc", "tLTC", "Litecoin Testnet", "https://litecoin.org", "scrypt", "m")
        },
        NetworkSpec {
            pubkeyhash: 0x1e,
            privatekey: 0x9e,
            scripthash: 0x16,
            xpubkey: 0x02facafd,
            xprivkey: 0x02fac398,
            network_magic: Some([0xc0, 0xc0, 0xc0, 0xc0].into()),
            port: Some(22556),
            dns_seeds: seeds(&[
                "seed.multidoge.org",
                "seed2.multidoge.org",
            ]),
            ..describe("dogecoin", "doge", "DOGE", "Dogecoin", "https://dogecoin.com", "scrypt", "D")
        },
        NetworkSpec {
            pubkeyhash: 0x71,
            privatekey: 0xf1,
            scripthash: 0xc4,
            xpubkey: 0x043587cf,
            xprivkey: 0x04358394,
            network_magic: Some([0xfc, 0xc1, 0xb7, 0xdc].into()),
            port: Some(44556),
            dns_seeds: seeds(&["testseed.jrn.me.uk"]),
            ..describe("dogetest", "tdoge", "tDOGE", "Dogecoin Testnet", "https://dogecoin.com", "scrypt", "n")
        },
        NetworkSpec {
            pubkeyhash: 0x4c,
            privatekey: 0xcc,
            scripthash: 0x10,
            xpubkey: BIP32_XPUB,
            xprivkey: BIP32_XPRV,
            network_magic: Some([0xbf, 0x0c, 0x6b, 0xbd].into()),
            port: Some(9999),
            dns_seeds: seeds(&[
                "dnsseed.dash.org",
                "dnsseed.dashdot.io",
            ]),
            ..describe("dash", "dsh", "DASH", "Dash", "https://dash.org", "x11", "X")
        },
        NetworkSpec {
            pubkeyhash: 0x8c,
            privatekey: 0xef,
            scripthash: 0x13,
            xpubkey: 0x3a8061a0,
            xprivkey: 0x3a805837,
            network_magic: Some([0xce, 0xe2, 0xca, 0xff].into()),
            port: Some(19999),
            dns_seeds: seeds(&["testnet-seed.dashdot.io"]),
            ..describe("dashtest", "tdash", "tDASH", "Dash Testnet", "https://dash.org", "x11", "y")
        },
        NetworkSpec {
            pubkeyhash: 0x37,
            privatekey: 0xb7,
            scripthash: 0x75,
            xpubkey: BIP32_XPUB,
            xprivkey: BIP32_XPRV,
            network_magic: Some([0xe6, 0xe8, 0xe9, 0xe5].into()),
            port: Some(9901),
            dns_seeds: seeds(&[
                "seed.peercoin.net",
                "seed2.peercoin.net",
            ]),
            txtimestamp: true,
            pos: true,
            ..describe("peercoin", "ppc", "PPC", "Peercoin", "https://peercoin.net", "sha256", "P")
        },
        NetworkSpec {
            pubkeyhash: 0x6f,
            privatekey: 0xef,
            scripthash: 0xc4,
            xpubkey: 0x043587cf,
            xprivkey: 0x04358394,
            network_magic: Some([0xcb, 0xf2, 0xc0, 0xef].into()),
            port: Some(9903),
            dns_seeds: seeds(&["tseed.peercoin.net"]),
            txtimestamp: true,
            pos: true,
            ..describe("ppctest", "tppc", "tPPC", "Peercoin Testnet", "https://peercoin.net", "sha256", "m")
        },
        NetworkSpec {
            pubkeyhash: 0x19,
            privatekey: 0x99,
            scripthash: 0x55,
            xpubkey: BIP32_XPUB,
            xprivkey: BIP32_XPRV,
            network_magic: Some([0x70, 0x35, 0x22, 0x05].into()),
            port: Some(15714),
            txtimestamp: true,
            pos: true,
            ..describe("blackcoin", "blk", "BLK", "BlackCoin", "https://blackcoin.org", "scrypt", "B")
        },
        NetworkSpec {
            pubkeyhash: 0x34,
            privatekey: 0xb4,
            scripthash: 0x0d,
            xpubkey: BIP32_XPUB,
            xprivkey: BIP32_XPRV,
            network_magic: Some([0xf9, 0xbe, 0xb4, 0xfe].into()),
            port: Some(8334),
            dns_seeds: seeds(&[
                "nmc.seed.quisquis.de",
                "seed.nmc.markasoftware.com",
            ]),
            ..describe("namecoin", "nmc", "NMC", "Namecoin", "https://namecoin.org", "sha256", "N")
        },
        NetworkSpec {
            pubkeyhash: 0x1e,
            privatekey: 0x80,
            scripthash: 0x3f,
            xpubkey: BIP32_XPUB,
            xprivkey: BIP32_XPRV,
            network_magic: Some([0xfa, 0xc3, 0xb6, 0xda].into()),
            port: Some(12024),
            dns_seeds: seeds(&["seed.digibyte.io"]),
            ..describe("digibyte", "dgb", "DGB", "DigiByte", "https://digibyte.io", "multi", "D")
        },
        NetworkSpec {
            pubkeyhash: 0x24,
            privatekey: 0x80,
            scripthash: 0x05,
            xpubkey: BIP32_XPUB,
            xprivkey: BIP32_XPRV,
            network_magic: Some([0xf9, 0xbe, 0xb4, 0xd4].into()),
            port: Some(1331),
            dns_seeds: seeds(&[
                "dnsseed1.groestlcoin.org",
                "dnsseed2.groestlcoin.org",
            ]),
            ..describe("groestlcoin", "grs", "GRS", "Groestlcoin", "https://groestlcoin.org", "groestl", "F")
        },
        NetworkSpec {
            pubkeyhash: 0x00,
            privatekey: 0x80,
            scripthash: 0x05,
            xpubkey: BIP32_XPUB,
            xprivkey: BIP32_XPRV,
            network_magic: Some([0xe3, 0xe1, 0xf3, 0xe8].into()),
            port: Some(8333),
            dns_seeds: seeds(&[
                "seed.bitcoinabc.org",
                "seed-abc.bitcoinforks.org",
            ]),
            ..describe("bitcoincash", "bch", "BCH", "Bitcoin Cash", "https://bitcoincash.org", "sha256", "1")
        },
        NetworkSpec {
            pubkeyhash: 0x6f,
            privatekey: 0xef,
            scripthash: 0xc4,
            xpubkey: 0x043587cf,
            xprivkey: 0x04358394,
            network_magic: Some([0xf4, 0xe5, 0xf3, 0xf4].into()),
            port: Some(18333),
            dns_seeds: seeds(&["testnet-seed.bitcoinabc.org"]),
            ..describe("bchtest", "tbch", "tBCH", "Bitcoin Cash Testnet", "https://bitcoincash.org", "sha256", "m")
        },
        NetworkSpec {
            pubkeyhash: 0x26,
            privatekey: 0x80,
            scripthash: 0x17,
            xpubkey: BIP32_XPUB,
            xprivkey: BIP32_XPRV,
            network_magic: Some([0xe1, 0x47, 0x6d, 0x44].into()),
            port: Some(8338),
            dns_seeds: seeds(&[
                "eu-dnsseed.bitcoingold-official.org",
                "dnsseed.bitcoingold.org",
            ]),
            ..describe("bitcoingold", "btg", "BTG", "Bitcoin Gold", "https://bitcoingold.org", "equihash", "G")
        },
        NetworkSpec {
            pubkeyhash: 0x3a,
            privatekey: 0x80,
            scripthash: 0x32,
            xpubkey: BIP32_XPUB,
            xprivkey: BIP32_XPRV,
            network_magic: Some([0xf1, 0xcf, 0xa6, 0xd3].into()),
            port: Some(3888),
            dns_seeds: seeds(&["qtum3.dynu.net"]),
            pos: true,
            ..describe("qtum", "qtum", "QTUM", "Qtum", "https://qtum.org", "sha256", "Q")
        },
        NetworkSpec {
            pubkeyhash: 0x35,
            privatekey: 0x96,
            scripthash: 0x55,
            xpubkey: BIP32_XPUB,
            xprivkey: BIP32_XPRV,
            network_magic: Some([0x80, 0x50, 0x34, 0x20].into()),
            port: Some(44440),
            dns_seeds: seeds(&["seed.nav.community"]),
            txtimestamp: true,
            pos: true,
            ..describe("navcoin", "nav", "NAV", "NavCoin", "https://navcoin.org", "x13", "N")
        },
        NetworkSpec {
            pubkeyhash: 0x1e,
            privatekey: 0xd4,
            scripthash: 0x0d,
            xpubkey: 0x022d2533,
            xprivkey: 0x0221312b,
            network_magic: Some([0x90, 0xc4, 0xfd, 0xe9].into()),
            port: Some(51472),
            dns_seeds: seeds(&[
                "pivx.seed.fuzzbawls.pw",
                "pivx.seed2.fuzzbawls.pw",
            ]),
            pos: true,
            ..describe("pivx", "pivx", "PIVX", "PIVX", "https://pivx.org", "quark", "D")
        },
        NetworkSpec {
            pubkeyhash: 0x49,
            privatekey: 0x42,
            scripthash: 0x53,
            xpubkey: 0x022d2533,
            xprivkey: 0x0221312b,
            network_magic: Some([0x2f, 0x1c, 0xd3, 0x0a].into()),
            port: Some(37817),
            pos: true,
            ..describe("twins", "twins", "TWINS", "TWINS", "https://win.win", "quark", "W")
        },
        NetworkSpec {
            pubkeyhash: 0x32,
            privatekey: 0xb0,
            scripthash: 0x37,
            xpubkey: BIP32_XPUB,
            xprivkey: BIP32_XPRV,
            network_magic: Some([0xfb, 0xc0, 0xb7, 0xdb].into()),
            port: Some(9401),
            dns_seeds: seeds(&["dnsseed.monacoin.org"]),
            ..describe("monacoin", "mona", "MONA", "Monacoin", "https://monacoin.org", "lyra2rev2", "M")
        },
        NetworkSpec {
            pubkeyhash: 0x47,
            privatekey: 0xc7,
            scripthash: 0x21,
            xpubkey: BIP32_XPUB,
            xprivkey: BIP32_XPRV,
            network_magic: Some([0xcb, 0xc6, 0x68, 0x0f].into()),
            port: Some(5223),
            dns_seeds: seeds(&[
                "seed.viacoin.net",
                "viaseeder.barbatos.fr",
            ]),
            ..describe("viacoin", "via", "VIA", "Viacoin", "https://viacoin.org", "scrypt", "V")
        },
        NetworkSpec {
            pubkeyhash: 0x52,
            privatekey: 0xd2,
            scripthash: 0x07,
            xpubkey: BIP32_XPUB,
            xprivkey: BIP32_XPRV,
            network_magic: Some([0xe3, 0xd9, 0xfe, 0xf1].into()),
            port: Some(8168),
            dns_seeds: seeds(&[
                "amsterdam.zcoin.io",
                "australia.zcoin.io",
            ]),
            ..describe("zcoin", "xzc", "XZC", "Zcoin", "https://zcoin.io", "mtp", "a")
        },
        NetworkSpec {
            pubkeyhash: 0x3c,
            privatekey: 0x80,
            scripthash: 0x7a,
            xpubkey: BIP32_XPUB,
            xprivkey: BIP32_XPRV,
            network_magic: Some([0x52, 0x41, 0x56, 0x4e].into()),
            port: Some(8767),
            dns_seeds: seeds(&[
                "seed-raven.bitactivate.com",
                "seed-raven.ravencoin.com",
            ]),
            ..describe("ravencoin", "rvn", "RVN", "Ravencoin", "https://ravencoin.org", "x16r", "R")
        },
        NetworkSpec {
            pubkeyhash: 0x08,
            privatekey: 0x88,
            scripthash: 0x14,
            xpubkey: BIP32_XPUB,
            xprivkey: BIP32_XPRV,
            network_magic: Some([0xe4, 0xe8, 0xe9, 0xe5].into()),
            port: Some(7777),
            txtimestamp: true,
            pos: true,
            ..describe("novacoin", "nvc", "NVC", "NovaCoin", "https://novacoin.org", "scrypt", "4")
        },
        NetworkSpec {
            pubkeyhash: 0x3c,
            privatekey: 0xbc,
            scripthash: 0x55,
            xpubkey: BIP32_XPUB,
            xprivkey: BIP32_XPRV,
            network_magic: Some([0xf9, 0xee, 0xe4, 0x8d].into()),
            port: Some(7770),
            dns_seeds: seeds(&["seeds.komodoplatform.com"]),
            ..describe("komodo", "kmd", "KMD", "Komodo", "https://komodoplatform.com", "equihash", "R")
        },
        NetworkSpec {
            pubkeyhash: 0x3f,
            privatekey: 0xbf,
            scripthash: 0x12,
            xpubkey: BIP32_XPUB,
            xprivkey: BIP32_XPRV,
            network_magic: Some([0x5c, 0xa1, 0xab, 0x1e].into()),
            port: Some(9678),
            ..describe("smartcash", "smart", "SMART", "SmartCash", "https://smartcash.cc", "keccak", "S")
        },
        NetworkSpec {
            pubkeyhash: 0x35,
            privatekey: 0xb5,
            scripthash: 0x70,
            xpubkey: BIP32_XPUB,
            xprivkey: BIP32_XPRV,
            network_magic: Some([0x32, 0x5e, 0x6f, 0x86].into()),
            port: Some(6325),
            txtimestamp: true,
            pos: true,
            ..describe("neblio", "nebl", "NEBL", "Neblio", "https://nebl.io", "scrypt", "N")
        },
        NetworkSpec {
            pubkeyhash: 0x89,
            privatekey: 0x85,
            scripthash: 0x0d,
            xpubkey: BIP32_XPUB,
            xprivkey: BIP32_XPRV,
            network_magic: Some([0x15, 0x35, 0x22, 0x03].into()),
            port: Some(31174),
            txtimestamp: true,
            pos: true,
            ..describe("clams", "clam", "CLAM", "Clams", "https://clamclient.com", "sha256", "x")
        },
        NetworkSpec {
            pubkeyhash: 0x37,
            privatekey: 0x03,
            scripthash: 0x1c,
            xpubkey: BIP32_XPUB,
            xprivkey: BIP32_XPRV,
            network_magic: Some([0x69, 0xf0, 0x0f, 0x69].into()),
            port: Some(6970),
            txtimestamp: true,
            pos: true,
            skip_sign_time: true,
            ..describe("okcash", "ok", "OK", "OKCash", "https://okcash.co", "scrypt", "P")
        },
        NetworkSpec {
            pubkeyhash: 0x55,
            privatekey: 0x1c,
            scripthash: 0x7a,
            xpubkey: BIP32_XPUB,
            xprivkey: BIP32_XPRV,
            network_magic: Some([0xfa, 0xe4, 0xaa, 0xf1].into()),
            port: Some(9246),
            dns_seeds: seeds(&[
                "dnsseed1.lbry.io",
                "dnsseed2.lbry.io",
            ]),
            ..describe("lbry", "lbc", "LBC", "LBRY Credits", "https://lbry.com", "lbry", "b")
        },
        NetworkSpec {
            pubkeyhash: 0x1e,
            privatekey: 0x9e,
            scripthash: 0x5a,
            xpubkey: BIP32_XPUB,
            xprivkey: BIP32_XPRV,
            network_magic: Some([0xfa, 0xf2, 0xef, 0xb4].into()),
            port: Some(33339),
            txtimestamp: true,
            pos: true,
            ..describe("denarius", "dnr", "DNR", "Denarius", "https://denarius.io", "tribus", "D")
        },
        NetworkSpec {
            pubkeyhash: 0x21,
            privatekey: 0xa1,
            scripthash: 0x37,
            xpubkey: BIP32_XPUB,
            xprivkey: BIP32_XPRV,
            network_magic: Some([0xe8, 0xf1, 0xc4, 0xac].into()),
            port: Some(41878),
            ..describe("einsteinium", "emc2", "EMC2", "Einsteinium", "https://emc2.foundation", "scrypt", "E")
        },
        NetworkSpec {
            pubkeyhash: 0x5a,
            privatekey: 0xda,
            scripthash: 0x08,
            xpubkey: BIP32_XPUB,
            xprivkey: BIP32_XPRV,
            network_magic: Some([0xe4, 0xe8, 0xbd, 0xfd].into()),
            port: Some(17771),
            txtimestamp: true,
            pos: true,
            ..describe("diamond", "dmd", "DMD", "Diamond", "https://bit.diamonds", "groestl", "d")
        },
        NetworkSpec {
            pubkeyhash: 0x66,
            privatekey: 0xcc,
            scripthash: 0x05,
            xpubkey: BIP32_XPUB,
            xprivkey: BIP32_XPRV,
            network_magic: Some([0xa3, 0xd5, 0xc2, 0xf9].into()),
            port: Some(8886),
            ..describe("bitsend", "bsd", "BSD", "BitSend", "https://bitsend.info", "xevan", "i")
        },
        NetworkSpec {
            pubkeyhash: 0x82,
            privatekey: 0xe0,
            scripthash: 0x1e,
            xpubkey: BIP32_XPUB,
            xprivkey: BIP32_XPRV,
            network_magic: Some([0x03, 0xd5, 0xb5, 0x03].into()),
            port: Some(65534),
            ..describe("unobtanium", "uno", "UNO", "Unobtanium", "https://unobtanium.uno", "sha256", "u")
        },
        NetworkSpec {
            pubkeyhash: 0x1e,
            privatekey: 0x9e,
            scripthash: 0x21,
            xpubkey: BIP32_XPUB,
            xprivkey: BIP32_XPRV,
            network_magic: Some([0xf7, 0xa7, 0x7e, 0xff].into()),
            port: Some(21102),
            txtimestamp: true,
            skip_sign_time: true,
            ..describe("verge", "xvg", "XVG", "Verge", "https://vergecurrency.com", "multi", "D")
        },
        NetworkSpec {
            pubkeyhash: 0x38,
            privatekey: 0x6c,
            scripthash: 0x3c,
            xpubkey: 0x696e82d1,
            xprivkey: 0x8f1daeb8,
            network_magic: Some([0xfb, 0xf2, 0xef, 0xb4].into()),
            port: Some(51738),
            dns_seeds: seeds(&[
                "mainnet-seed.particl.io",
                "dnsseed-mainnet.particl.io",
            ]),
            pos: true,
            skip_sign_time: true,
            ..describe("particl", "part", "PART", "Particl", "https://particl.io", "pos", "P")
        },
    ]
}
