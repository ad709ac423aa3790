// SPDX-License-Identifier: CC0-1.0

//! Address tests.

use alloc::string::ToString;
use alloc::vec::Vec;
use core::str::FromStr;

use hex_lit::hex;

use super::*;

fn roundtrips(addr: &Address) {
    let registry = NetworkRegistry::builtin();
    assert_eq!(
        Address::from_text(&addr.to_string(), &registry).unwrap(),
        *addr,
        "cashaddr round-trip failed for {}",
        addr,
    );
    assert_eq!(
        Address::from_cashaddr_str(&addr.to_cashaddr_unprefixed(), addr.network()).unwrap(),
        *addr,
        "unprefixed round-trip failed for {}",
        addr,
    );
    assert_eq!(
        Address::from_base58_str(&addr.to_base58(), addr.network()).unwrap(),
        *addr,
        "base58 round-trip failed for {}",
        addr,
    );

    #[cfg(feature = "serde")]
    {
        let ser = serde_json::to_string(addr).expect("failed to serialize address");
        let back: Address = serde_json::from_str(&ser).expect("failed to deserialize address");
        assert_eq!(back, *addr, "serde round-trip failed for {}", addr)
    }
}

#[test]
fn p2pkh_address() {
    let hash = hex!("76a04053bda0a88bda5177b86a15c3b29f559873");
    let addr = Address::p2pkh(hash, &MAINNET);

    assert_eq!(&addr.to_string(), "bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a");
    assert_eq!(&addr.to_base58(), "1BpEi6DfDAUFd7GtittLSdBeYJvcoaVggu");
    assert_eq!(addr.address_type(), AddressType::P2pkh);
    assert_eq!(addr.legacy_version(), 0);
    roundtrips(&addr);
}

#[test]
fn p2sh_address() {
    let hash = hex!("76a04053bda0a88bda5177b86a15c3b29f559873");
    let addr = Address::p2sh(hash, &MAINNET);

    assert_eq!(&addr.to_string(), "bitcoincash:ppm2qsznhks23z7629mms6s4cwef74vcwvn0h829pq");
    assert_eq!(&addr.to_base58(), "3CWFddi6m4ndiGyKqzYvsFYagqDLPVMTzC");
    assert_eq!(addr.address_type(), AddressType::P2sh);
    assert_eq!(addr.legacy_version(), 5);
    roundtrips(&addr);
}

#[test]
fn cross_format_vectors() {
    let vectors = [
        (
            hex!("cb481232299cd5743151ac4b2d63ae198e7bb0a9"),
            "1KXrWXciRDZUpQwQmuM1DbwsKDLYAYsVLR",
            "bitcoincash:qr95sy3j9xwd2ap32xkykttr4cvcu7as4y0qverfuy",
            "3LDsS579y7sruadqu11beEJoTjdFiFCdX4",
            "bitcoincash:pr95sy3j9xwd2ap32xkykttr4cvcu7as4yc93ky28e",
        ),
        (
            hex!("011f28e473c95f4013d7d53ec5fbc3b42df8ed10"),
            "16w1D5WRVKJuZUsSRzdLp9w3YGcgoxDXb",
            "bitcoincash:qqq3728yw0y47sqn6l2na30mcw6zm78dzqre909m2r",
            "31nwvkZwyPdgzjBJZXfDmSWsC4ZLKpYyUw",
            "bitcoincash:pqq3728yw0y47sqn6l2na30mcw6zm78dzq5ucqzc37",
        ),
    ];
    let registry = NetworkRegistry::builtin();

    for (hash, p2pkh_legacy, p2pkh_cash, p2sh_legacy, p2sh_cash) in vectors {
        let from_legacy = Address::from_text(p2pkh_legacy, &registry).unwrap();
        let from_cash = Address::from_text(p2pkh_cash, &registry).unwrap();
        assert_eq!(from_legacy, from_cash);
        assert_eq!(from_legacy.hash(), &hash[..]);
        assert_eq!(from_legacy.to_cashaddr(), p2pkh_cash);
        assert_eq!(from_cash.to_base58(), p2pkh_legacy);

        let from_legacy = Address::from_text(p2sh_legacy, &registry).unwrap();
        let from_cash = Address::from_text(p2sh_cash, &registry).unwrap();
        assert_eq!(from_legacy, from_cash);
        assert_eq!(from_legacy.address_type(), AddressType::P2sh);
        assert_eq!(from_legacy.to_cashaddr(), p2sh_cash);
        assert_eq!(from_cash.to_base58(), p2sh_legacy);
    }
}

#[test]
fn readme_vectors() {
    let registry = NetworkRegistry::builtin();

    let addr = Address::from_base58_str_in("12gLdGD5q5KdWViDtq3MouheF9PJr8HmB1", &registry).unwrap();
    assert_eq!(addr.to_cashaddr(), "bitcoincash:qqfx3wcg8ts09mt5l3zey06wenapyfqq2qrcyj5x0s");
    assert_eq!(addr.network(), &MAINNET);

    let addr = Address::from_base58_str_in("14krEkSaKoTkbFT9iUCfUYARo4EXA8co6M", &registry).unwrap();
    assert_eq!(addr.to_cashaddr(), "bitcoincash:qq5nxh27up6hcm0nn36lxtu7n8a7l6jsj52s8dvtex");
    assert_eq!(addr.network(), &MAINNET);

    let addr = Address::from_text("mqc1tmwY2368LLGktnePzEyPAsgADxbksi", &registry).unwrap();
    assert_eq!(addr.network(), &TESTNET);
    assert_eq!(addr.to_cashaddr(), "bchtest:qph2v4mkxjgdqgmlyjx6njmey0ftrxlnggt9t0a6zy");
}

#[test]
fn prefix_is_optional() {
    let registry = NetworkRegistry::builtin();
    let prefixed =
        Address::from_text("bitcoincash:qqfx3wcg8ts09mt5l3zey06wenapyfqq2qrcyj5x0s", &registry)
            .unwrap();
    let bare = Address::from_text("qqfx3wcg8ts09mt5l3zey06wenapyfqq2qrcyj5x0s", &registry).unwrap();
    assert_eq!(prefixed, bare);
    assert_eq!(bare.network(), &MAINNET);
}

#[test]
fn testnet_addresses() {
    let addr = Address::from_base58_str("mqkhEMH6NCeYjFybv7pvFC22MFeaNT9AQC", &TESTNET).unwrap();
    assert_eq!(addr.address_type(), AddressType::P2pkh);
    assert_eq!(addr.hash(), &hex!("704a81b27f00336d6b150958b7741c5807ba9540")[..]);
    assert_eq!(addr.to_cashaddr(), "bchtest:qpcy4qdj0uqrxmttz5y43dm5r3vq0w54gqhn4wzvhg");
    roundtrips(&addr);

    let addr = Address::from_base58_str("2N3zXjbwdTcPsJiy8sUK9FhWJhqQCxA8Jjr", &TESTNET).unwrap();
    assert_eq!(addr.address_type(), AddressType::P2sh);
    assert_eq!(addr.legacy_version(), 196);
    assert_eq!(addr.to_cashaddr(), "bchtest:pp67ratrv6velfcxpk2r53d6gtsxtvyhj59ruwfyu4");
    roundtrips(&addr);
}

#[test]
fn regtest_shares_legacy_versions() {
    let legacy = "mqkhEMH6NCeYjFybv7pvFC22MFeaNT9AQC";
    let addr = Address::from_base58_str(legacy, &REGTEST).unwrap();
    assert_eq!(addr.network(), &REGTEST);
    assert_eq!(addr.to_cashaddr(), "bchreg:qpcy4qdj0uqrxmttz5y43dm5r3vq0w54gqd0r0pl5w");
    assert_eq!(addr.to_base58(), legacy);

    // The same text is a testnet address when the network is guessed.
    let guessed = Address::from_base58_str_in(legacy, &NetworkRegistry::builtin()).unwrap();
    assert_eq!(guessed.network(), &TESTNET);
    assert_ne!(guessed, addr);
}

#[test]
fn wrong_network() {
    let err = Address::from_base58_str("mqkhEMH6NCeYjFybv7pvFC22MFeaNT9AQC", &MAINNET).unwrap_err();
    match err {
        ParseError::WrongNetwork(ref e) => {
            assert_eq!(e.version(), TESTNET.p2pkh_version());
            assert_eq!(e.expected(), [0, 5]);
            assert_eq!(e.network(), "mainnet");
        }
        ref other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.to_string().contains("mainnet"));
}

#[test]
fn prefix_mismatch() {
    let err = Address::from_cashaddr_str(
        "bchtest:qpcy4qdj0uqrxmttz5y43dm5r3vq0w54gqhn4wzvhg",
        &MAINNET,
    )
    .unwrap_err();
    assert_eq!(
        err,
        ParseError::PrefixMismatch(PrefixMismatchError {
            expected: "bitcoincash".into(),
            found: "bchtest".into(),
        })
    );

    // Checked before the checksum.
    let err = Address::from_cashaddr_str("bchtest:qqqqqqqqqqqq", &MAINNET).unwrap_err();
    assert!(matches!(err, ParseError::PrefixMismatch(_)));

    // Case does not matter for the comparison.
    let addr = Address::from_cashaddr_str(
        "BCHTEST:QPCY4QDJ0UQRXMTTZ5Y43DM5R3VQ0W54GQHN4WZVHG",
        &TESTNET,
    )
    .unwrap();
    assert_eq!(addr.network(), &TESTNET);
}

#[test]
fn case_rules() {
    let lower = "bitcoincash:qr95sy3j9xwd2ap32xkykttr4cvcu7as4y0qverfuy";
    let upper = lower.to_uppercase();
    assert_eq!(Address::from_str(lower).unwrap(), Address::from_str(&upper).unwrap());

    let mixed = "bitcoincash:qr95sy3j9xwd2ap32xkykttr4cvcu7as4y0qVerfuy";
    assert!(matches!(
        Address::from_cashaddr_str(mixed, &MAINNET),
        Err(ParseError::Format(FormatError::CashAddr(cashaddr::FormatError::MixedCase)))
    ));
}

#[test]
fn every_substitution_fails() {
    let valid = "bitcoincash:qr95sy3j9xwd2ap32xkykttr4cvcu7as4y0qverfuy";
    let start = valid.find(':').unwrap() + 1;
    for pos in start..valid.len() {
        for &c in cashaddr::CHARSET.iter() {
            if valid.as_bytes()[pos] == c {
                continue;
            }
            let mut corrupted = valid.as_bytes().to_vec();
            corrupted[pos] = c;
            let corrupted = alloc::string::String::from_utf8(corrupted).unwrap();
            assert!(
                matches!(
                    Address::from_cashaddr_str(&corrupted, &MAINNET),
                    Err(ParseError::Checksum(_))
                ),
                "{}",
                corrupted
            );
        }
    }
}

#[test]
fn legacy_checksum() {
    // Last character changed.
    let err = Address::from_base58_str("1BpEi6DfDAUFd7GtittLSdBeYJvcoaVggv", &MAINNET).unwrap_err();
    assert!(matches!(err, ParseError::Checksum(ChecksumError::Base58(_))));
}

#[test]
fn legacy_payload_length() {
    // A 21 byte payload has no size class.
    let text = base58::encode_versioned(0, &[0x11; 21]);
    assert_eq!(
        Address::from_base58_str(&text, &MAINNET),
        Err(ParseError::InvalidHashLength(cashaddr::InvalidHashLengthError::new(21)))
    );

    // A 32 byte payload is fine.
    let text = base58::encode_versioned(5, &[0x22; 32]);
    let addr = Address::from_base58_str(&text, &MAINNET).unwrap();
    assert_eq!(addr.address_type(), AddressType::P2sh);
    assert_eq!(addr.hash().len(), 32);
    roundtrips(&addr);
}

#[test]
fn legacy_too_long() {
    let text = "1".repeat(MAX_BASE58_LEN + 1);
    assert!(matches!(
        Address::from_base58_str(&text, &MAINNET),
        Err(ParseError::Format(FormatError::LegacyAddressTooLong(_)))
    ));
}

#[test]
fn unknown_legacy_version() {
    let text = base58::encode_versioned(42, &[0x33; 20]);
    assert_eq!(
        Address::from_base58_str_in(&text, &NetworkRegistry::builtin()),
        Err(ParseError::NoMatch(NoMatchError::UnknownLegacyVersion(42)))
    );
}

#[test]
fn every_hash_length() {
    for len in cashaddr::HASH_LENGTHS {
        let hash: Vec<u8> = (0..len).map(|i| (i * 7) as u8).collect();
        for kind in [AddressType::P2pkh, AddressType::P2sh] {
            let addr = Address::new(&TESTNET, kind, &hash).unwrap();
            roundtrips(&addr);
        }
    }
    assert!(Address::new(&MAINNET, AddressType::P2pkh, &[0; 19]).is_err());
}

#[test]
fn network_validation() {
    let addr = Address::from_str("bchtest:qpcy4qdj0uqrxmttz5y43dm5r3vq0w54gqhn4wzvhg").unwrap();
    assert!(addr.is_valid_for_network(&TESTNET));
    assert!(!addr.is_valid_for_network(&MAINNET));
    assert!(!addr.is_valid_for_network(&REGTEST));
}

#[test]
fn network_of() {
    let registry = NetworkRegistry::builtin();
    assert_eq!(
        Address::network_of("qqfx3wcg8ts09mt5l3zey06wenapyfqq2qrcyj5x0s", &registry),
        Some(MAINNET.clone())
    );
    assert_eq!(
        Address::network_of("2N3zXjbwdTcPsJiy8sUK9FhWJhqQCxA8Jjr", &registry),
        Some(TESTNET.clone())
    );
    assert_eq!(Address::network_of("not an address", &registry), None);
}

#[test]
fn alternate_display_is_upper_case() {
    let addr = Address::p2pkh(hex!("cb481232299cd5743151ac4b2d63ae198e7bb0a9"), &MAINNET);
    assert_eq!(format!("{:#}", addr), "BITCOINCASH:QR95SY3J9XWD2AP32XKYKTTR4CVCU7AS4Y0QVERFUY");
    assert_eq!(addr.to_qr_uri(), "BITCOINCASH:QR95SY3J9XWD2AP32XKYKTTR4CVCU7AS4Y0QVERFUY");
    assert_eq!(addr.to_cashaddr_unprefixed(), "qr95sy3j9xwd2ap32xkykttr4cvcu7as4y0qverfuy");
    assert_eq!(format!("{:?}", addr), addr.to_string());
}

#[test]
fn ordering() {
    let low = Address::p2pkh([0xff; 20], &MAINNET);
    let high = Address::p2sh([0x00; 20], &MAINNET);
    let test = Address::p2pkh([0x00; 20], &TESTNET);
    // Legacy version first: 0 < 5 < 111.
    let mut addrs = [test.clone(), high.clone(), low.clone()];
    addrs.sort();
    assert_eq!(addrs, [low, high, test]);

    // Hash second.
    assert!(Address::p2pkh([0x01; 20], &MAINNET) < Address::p2pkh([0x02; 20], &MAINNET));
}

#[test]
fn address_type_strings() {
    assert_eq!(AddressType::P2pkh.to_string(), "p2pkh");
    assert_eq!("p2sh".parse::<AddressType>(), Ok(AddressType::P2sh));
    assert_eq!(
        "p2wpkh".parse::<AddressType>(),
        Err(UnknownAddressTypeError("p2wpkh".to_string()))
    );
}

#[test]
fn hash160_input() {
    use hashes::hash160;

    let hash = hash160::Hash::from_byte_array(hex!("011f28e473c95f4013d7d53ec5fbc3b42df8ed10"));
    let addr = Address::p2pkh(hash, &MAINNET);
    assert_eq!(addr.to_base58(), "16w1D5WRVKJuZUsSRzdLp9w3YGcgoxDXb");
    let addr = Address::p2sh(hash, &MAINNET);
    assert_eq!(addr.to_base58(), "31nwvkZwyPdgzjBJZXfDmSWsC4ZLKpYyUw");
}

#[test]
fn errors_are_distinct() {
    let registry = NetworkRegistry::builtin();
    let cases: [(&str, fn(&ParseError) -> bool); 4] = [
        ("bitcoincash:qr95sy3j9xwd2ap32xkykttr4cvcu7as4y0qverfuq", |e| {
            matches!(e, ParseError::Checksum(_))
        }),
        ("bitcoincash:qr95sy3j9xwd2ap32xkykttr4cvcu7as4y0qVerfuy", |e| {
            matches!(e, ParseError::Format(_))
        }),
        ("ecash:qr95sy3j9xwd2ap32xkykttr4cvcu7as4y0qverfuy", |e| {
            matches!(e, ParseError::NoMatch(_))
        }),
        ("1BpEi6DfDAUFd7GtittLSdBeYJvcoaVggv", |e| matches!(e, ParseError::Checksum(_))),
    ];
    for (text, check) in cases {
        let err = Address::from_text(text, &registry).unwrap_err();
        assert!(check(&err), "{}: {:?}", text, err);
    }
}

#[test]
#[cfg(feature = "serde")]
fn serde_tokens() {
    use serde_test::{assert_tokens, Token};

    let addr = Address::p2pkh(hex!("76a04053bda0a88bda5177b86a15c3b29f559873"), &MAINNET);
    assert_tokens(&addr, &[Token::Str("bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a")]);

    // Legacy text is accepted on the way in.
    serde_test::assert_de_tokens(&addr, &[Token::Str("1BpEi6DfDAUFd7GtittLSdBeYJvcoaVggu")]);
}
