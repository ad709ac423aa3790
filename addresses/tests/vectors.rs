// SPDX-License-Identifier: CC0-1.0

//! Known address vectors, parsed through the public API only.

use std::sync::Arc;
use std::thread;

use hex_lit::hex;

use bch_addresses::{Address, AddressType, NetworkRegistry, ParseError, MAINNET, TESTNET};

struct Vector {
    legacy: &'static str,
    cashaddr: &'static str,
    network: &'static str,
    kind: AddressType,
    hash: [u8; 20],
}

const VECTORS: &[Vector] = &[
    Vector {
        legacy: "1BpEi6DfDAUFd7GtittLSdBeYJvcoaVggu",
        cashaddr: "bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a",
        network: "mainnet",
        kind: AddressType::P2pkh,
        hash: hex!("76a04053bda0a88bda5177b86a15c3b29f559873"),
    },
    Vector {
        legacy: "1KXrWXciRDZUpQwQmuM1DbwsKDLYAYsVLR",
        cashaddr: "bitcoincash:qr95sy3j9xwd2ap32xkykttr4cvcu7as4y0qverfuy",
        network: "mainnet",
        kind: AddressType::P2pkh,
        hash: hex!("cb481232299cd5743151ac4b2d63ae198e7bb0a9"),
    },
    Vector {
        legacy: "16w1D5WRVKJuZUsSRzdLp9w3YGcgoxDXb",
        cashaddr: "bitcoincash:qqq3728yw0y47sqn6l2na30mcw6zm78dzqre909m2r",
        network: "mainnet",
        kind: AddressType::P2pkh,
        hash: hex!("011f28e473c95f4013d7d53ec5fbc3b42df8ed10"),
    },
    Vector {
        legacy: "3CWFddi6m4ndiGyKqzYvsFYagqDLPVMTzC",
        cashaddr: "bitcoincash:ppm2qsznhks23z7629mms6s4cwef74vcwvn0h829pq",
        network: "mainnet",
        kind: AddressType::P2sh,
        hash: hex!("76a04053bda0a88bda5177b86a15c3b29f559873"),
    },
    Vector {
        legacy: "3LDsS579y7sruadqu11beEJoTjdFiFCdX4",
        cashaddr: "bitcoincash:pr95sy3j9xwd2ap32xkykttr4cvcu7as4yc93ky28e",
        network: "mainnet",
        kind: AddressType::P2sh,
        hash: hex!("cb481232299cd5743151ac4b2d63ae198e7bb0a9"),
    },
    Vector {
        legacy: "31nwvkZwyPdgzjBJZXfDmSWsC4ZLKpYyUw",
        cashaddr: "bitcoincash:pqq3728yw0y47sqn6l2na30mcw6zm78dzq5ucqzc37",
        network: "mainnet",
        kind: AddressType::P2sh,
        hash: hex!("011f28e473c95f4013d7d53ec5fbc3b42df8ed10"),
    },
    Vector {
        legacy: "12gLdGD5q5KdWViDtq3MouheF9PJr8HmB1",
        cashaddr: "bitcoincash:qqfx3wcg8ts09mt5l3zey06wenapyfqq2qrcyj5x0s",
        network: "mainnet",
        kind: AddressType::P2pkh,
        hash: hex!("1268bb083ae0f2ed74fc45923f4eccfa12240050"),
    },
    Vector {
        legacy: "14krEkSaKoTkbFT9iUCfUYARo4EXA8co6M",
        cashaddr: "bitcoincash:qq5nxh27up6hcm0nn36lxtu7n8a7l6jsj52s8dvtex",
        network: "mainnet",
        kind: AddressType::P2pkh,
        hash: hex!("29335d5ee0757c6df39c75f32f9e99fbefea5095"),
    },
    Vector {
        legacy: "mqc1tmwY2368LLGktnePzEyPAsgADxbksi",
        cashaddr: "bchtest:qph2v4mkxjgdqgmlyjx6njmey0ftrxlnggt9t0a6zy",
        network: "testnet",
        kind: AddressType::P2pkh,
        hash: hex!("6ea657763490d0237f248da9cb7923d2b19bf342"),
    },
    Vector {
        legacy: "2N3zXjbwdTcPsJiy8sUK9FhWJhqQCxA8Jjr",
        cashaddr: "bchtest:pp67ratrv6velfcxpk2r53d6gtsxtvyhj59ruwfyu4",
        network: "testnet",
        kind: AddressType::P2sh,
        hash: hex!("75e1f56366999fa7060d943a45ba42e065b09795"),
    },
];

#[test]
fn both_forms_agree() {
    let registry = NetworkRegistry::builtin();
    for v in VECTORS {
        let legacy = Address::from_text(v.legacy, &registry).unwrap();
        let cashaddr = Address::from_text(v.cashaddr, &registry).unwrap();
        let bare = v.cashaddr.split_once(':').unwrap().1;
        let unprefixed = Address::from_text(bare, &registry).unwrap();

        assert_eq!(legacy, cashaddr, "{}", v.legacy);
        assert_eq!(cashaddr, unprefixed, "{}", v.cashaddr);
        assert_eq!(legacy.network().id(), v.network);
        assert_eq!(legacy.address_type(), v.kind);
        assert_eq!(legacy.hash(), &v.hash[..]);

        assert_eq!(legacy.to_cashaddr(), v.cashaddr);
        assert_eq!(cashaddr.to_base58(), v.legacy);
        assert_eq!(cashaddr.to_cashaddr_unprefixed(), bare);

        let upper = v.cashaddr.to_uppercase();
        assert_eq!(upper.parse::<Address>().unwrap(), cashaddr);
    }
}

#[test]
fn explicit_network_parsers() {
    for v in VECTORS {
        let network = if v.network == "mainnet" { &MAINNET } else { &TESTNET };
        let other = if v.network == "mainnet" { &TESTNET } else { &MAINNET };

        assert!(Address::from_base58_str(v.legacy, network).is_ok());
        assert!(Address::from_cashaddr_str(v.cashaddr, network).is_ok());
        assert!(matches!(
            Address::from_base58_str(v.legacy, other),
            Err(ParseError::WrongNetwork(_))
        ));
        assert!(matches!(
            Address::from_cashaddr_str(v.cashaddr, other),
            Err(ParseError::PrefixMismatch(_))
        ));
    }
}

#[test]
fn registry_is_shared_across_threads() {
    let registry = Arc::new(NetworkRegistry::builtin());
    let handles: Vec<_> = VECTORS
        .iter()
        .map(|v| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let address = Address::from_text(v.cashaddr, &registry).unwrap();
                address.to_base58() == v.legacy
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
