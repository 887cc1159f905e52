use wbflat::flatten;

#[test]
fn flatten_sample_gdp_response() {
    let sample = r#"
    [
      {"page":1,"pages":1,"per_page":50,"total":2},
      [
        {
          "indicator":{"id":"NY.GDP.MKTP.CD","value":"GDP (current US$)"},
          "country":{"id":"FR","value":"France"},
          "countryiso3code":"FRA",
          "date":"2022",
          "value":2782905499081.76,
          "unit":"",
          "obs_status":"",
          "decimal":0
        },
        {
          "indicator":{"id":"NY.GDP.MKTP.CD","value":"GDP (current US$)"},
          "country":{"id":"FR","value":"France"},
          "countryiso3code":"FRA",
          "date":"2021",
          "value":2957879759912.54,
          "unit":"",
          "obs_status":"",
          "decimal":0
        }
      ]
    ]
    "#;

    let doc: serde_json::Value = serde_json::from_str(sample).unwrap();
    let rows = flatten(&doc).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].country_name.as_deref(), Some("France"));
    assert_eq!(rows[0].country_code.as_deref(), Some("FR"));
    assert_eq!(rows[0].indicator_code.as_deref(), Some("NY.GDP.MKTP.CD"));
    assert_eq!(rows[0].value, Some(2782905499081.76));
    assert_eq!(rows[0].date, "2022");
    assert_eq!(rows[1].value, Some(2957879759912.54));
    assert_eq!(rows[1].date, "2021");
}

#[test]
fn flatten_keeps_response_order_and_passthrough_fields() {
    let sample = r#"
    [
      {"page":1,"pages":1,"per_page":"3","total":3},
      [
        {"indicator":{"id":"NE.IMP.GNFS.CD","value":"Imports"},
         "country":{"id":"CF","value":"Central African Republic"},
         "countryiso3code":"CAF","date":"2023","value":null,
         "unit":"","obs_status":"E","decimal":1},
        {"indicator":{"id":"NE.IMP.GNFS.CD","value":"Imports"},
         "country":{"id":"CF","value":"Central African Republic"},
         "countryiso3code":"CAF","date":"2022","value":704905045.0,
         "unit":"","obs_status":"","decimal":1},
        {"indicator":{"id":"NE.IMP.GNFS.CD","value":"Imports"},
         "country":{"id":"CF","value":"Central African Republic"},
         "countryiso3code":"CAF","date":"2021","value":652430000.0,
         "unit":"","obs_status":"","decimal":1}
      ]
    ]
    "#;

    let doc: serde_json::Value = serde_json::from_str(sample).unwrap();
    let rows = flatten(&doc).unwrap();

    assert_eq!(rows.len(), 3);
    let dates: Vec<&str> = rows.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(dates, ["2023", "2022", "2021"]);

    // Null observation stays missing; auxiliary fields pass through.
    assert_eq!(rows[0].value, None);
    assert_eq!(rows[0].obs_status.as_deref(), Some("E"));
    assert_eq!(rows[0].decimal, Some(1));
    assert_eq!(rows[1].value, Some(704905045.0));
    assert_eq!(rows[2].countryiso3code, "CAF");
}

#[test]
fn flatten_empty_response_yields_empty_table() {
    let sample = r#"[{"page":1,"pages":1,"per_page":50,"total":0},[]]"#;
    let doc: serde_json::Value = serde_json::from_str(sample).unwrap();
    assert!(flatten(&doc).unwrap().is_empty());
}
