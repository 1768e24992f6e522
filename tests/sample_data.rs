use chrono::{DateTime, Utc};
use options_data::prelude::*;

#[test]
fn sample_set_is_four_contracts_in_order() {
    let data = sample_data();
    assert_eq!(data.len(), 4);

    let strikes: Vec<f64> = data.iter().map(|c| c.strike_price).collect();
    assert_eq!(strikes, vec![100.0, 102.5, 103.0, 105.0]);

    assert_eq!(data[0].option_type, OptionType::Call);
    assert_eq!(data[2].option_type, OptionType::Put);
    assert_eq!(data[2].long_short, LongShort::Short);
    assert_eq!(data.iter().filter(|c| c.is_long()).count(), 3);
}

#[test]
fn every_contract_expires_on_sample_date() {
    let expected: DateTime<Utc> = "2025-12-17T00:00:00Z".parse().unwrap();
    for contract in sample_data() {
        assert_eq!(contract.expiration_date, expected);
    }
}

#[test]
fn sample_set_satisfies_invariants() {
    for contract in sample_data() {
        assert!(contract.strike_price > 0.0);
        assert!(contract.bid >= 0.0);
        assert!(contract.ask >= contract.bid);
        assert!(contract.validate_with(&ValidationConfig::strict()).is_ok());
    }
}

#[test]
fn sample_set_is_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| sample_data().as_ptr() as usize))
        .collect();
    let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addrs.iter().all(|a| *a == addrs[0]));
}

#[test]
fn sample_set_serializes_to_source_shape() {
    let json = serde_json::to_value(sample_data()).unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 4);

    assert_eq!(rows[2]["type"], "Put");
    assert_eq!(rows[2]["long_short"], "short");
    assert_eq!(rows[2]["expiration_date"], SAMPLE_EXPIRATION);

    let back: Vec<OptionContract> = serde_json::from_value(json).unwrap();
    assert_eq!(back.as_slice(), sample_data());
}

#[test]
fn edited_copy_leaves_sample_untouched() {
    let mut copy = sample_data().to_vec();
    copy[0].bid = 99.0;
    copy.push(copy[1].clone());

    assert_eq!(sample_data().len(), 4);
    assert_eq!(sample_data()[0].bid, 10.05);

    let failures = validate_all(&copy, &ValidationConfig::default());
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, 0);
    assert_eq!(failures[0].1.field(), Some(ContractField::Ask));
}
