use super::*;
use crate::model::record::Record;

fn rec(t: f64, g: f64, c: f64) -> Record {
    Record::new(t, g, c).expect("valid record")
}

#[test]
fn restricted_means_use_strict_thresholds() {
    let data = Dataset::from(vec![rec(15.0, 1.0, 1.0), rec(55.0, 3.0, 1.0)]);
    assert_eq!(
        Statistic::MeanHotGrowthRate.compute(&data),
        StatValue::Number(3.0)
    );
    assert_eq!(
        Statistic::MeanColdGrowthRate.compute(&data),
        StatValue::Number(1.0)
    );

    let edges = Dataset::from(vec![rec(20.0, 1.0, 1.0), rec(50.0, 3.0, 1.0)]);
    assert!(Statistic::MeanColdGrowthRate.compute(&edges).is_no_data());
    assert!(Statistic::MeanHotGrowthRate.compute(&edges).is_no_data());
}

#[test]
fn empty_dataset_yields_no_data_not_zero() {
    let empty = Dataset::empty();
    for stat in [
        Statistic::MeanTemperature,
        Statistic::MeanGrowthRate,
        Statistic::StdTemperature,
        Statistic::StdGrowthRate,
        Statistic::MeanColdGrowthRate,
        Statistic::MeanHotGrowthRate,
    ] {
        let value = stat.compute(&empty);
        assert_eq!(value, StatValue::NoData, "{stat}");
        assert_ne!(value, StatValue::Number(0.0));
        assert_eq!(value.as_f64(), None);
    }
    assert_eq!(Statistic::RowCount.compute(&empty), StatValue::Count(0));
}

#[test]
fn basic_reducers() {
    let data = Dataset::from(vec![
        rec(10.0, 1.0, 1.0),
        rec(30.0, 3.0, 2.0),
        rec(50.0, 2.0, 3.0),
    ]);
    assert_eq!(
        Statistic::MeanTemperature.compute(&data),
        StatValue::Number(30.0)
    );
    assert_eq!(
        Statistic::MeanGrowthRate.compute(&data),
        StatValue::Number(2.0)
    );
    assert_eq!(Statistic::RowCount.compute(&data), StatValue::Count(3));
    let sd = Statistic::StdTemperature
        .compute(&data)
        .as_f64()
        .expect("std");
    assert!((sd - (800.0f64 / 3.0).sqrt()).abs() < 1e-9);
}

#[test]
fn lookup_by_key_name_or_number() {
    assert_eq!(
        "mean-temperature".parse::<Statistic>(),
        Ok(Statistic::MeanTemperature)
    );
    assert_eq!(
        "Mean Hot Growth Rate".parse::<Statistic>(),
        Ok(Statistic::MeanHotGrowthRate)
    );
    assert_eq!("data rows".parse::<Statistic>(), Ok(Statistic::RowCount));
    assert_eq!("6".parse::<Statistic>(), Ok(Statistic::MeanColdGrowthRate));
    for stat in Statistic::ordered() {
        assert_eq!(stat.key().parse::<Statistic>(), Ok(*stat));
        assert_eq!(stat.number().to_string().parse::<Statistic>(), Ok(*stat));
    }
}

#[test]
fn unknown_statistic_fails_fast() {
    let data = Dataset::empty();
    assert_eq!(
        compute_statistic(&data, "median"),
        Err(StatsError::UnknownStatistic("median".to_string()))
    );
    assert!(compute_statistic(&data, "8").is_err());
}

#[test]
fn no_data_serializes_as_null() {
    let results = compute_all(&Dataset::empty(), &[Statistic::MeanTemperature, Statistic::RowCount]);
    let json = serde_json::to_value(&results).expect("json");
    assert!(json[0]["value"].is_null());
    assert_eq!(json[1]["value"], 0);
    assert_eq!(json[0]["key"], "mean-temperature");
}
