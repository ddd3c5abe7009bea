use contrast_core::{Row, Section, SpecDiff};

/// A spec diff touching every one of the six report sections
#[allow(dead_code)]
pub fn sample_diff() -> SpecDiff {
    SpecDiff::from_json_str(
        r#"{
  "requests": [
    {"change": "modified",
     "old": {"name": "com.example.GetBucketRequest", "classification": "amazons3", "verb": "GET",
             "params": [{"name": "Marker", "type": "java.lang.String"}]},
     "new": {"name": "com.example.GetBucketRequest", "classification": "amazons3", "verb": "GET",
             "params": [{"name": "Marker", "type": "java.lang.String"},
                        {"name": "MaxKeys", "type": "int"}]}},
    {"change": "deleted",
     "old": {"name": "com.example.DeleteJobRequest", "classification": "spectrads3", "verb": "DELETE"}},
    {"change": "added",
     "new": {"name": "com.example.PutObjectRequest", "classification": "amazons3", "verb": "PUT"}}
  ],
  "types": [
    {"change": "modified",
     "old": {"name": "com.example.Bucket", "elements": [{"name": "Size", "type": "int"}]},
     "new": {"name": "com.example.Bucket", "elements": [{"name": "Size", "type": "long"}]}},
    {"change": "deleted", "old": {"name": "com.example.Job", "nameToMarshal": "Job"}},
    {"change": "added", "new": {"name": "com.example.Tape", "nameToMarshal": "Tape"}}
  ]
}"#,
    )
    .unwrap()
}

/// The "Bucket" section with one added and one deleted row
#[allow(dead_code)]
pub fn bucket_section() -> Section {
    Section::new(
        "Bucket",
        vec![
            Row::added(0, "name", "x").unwrap(),
            Row::deleted(1, "size", "100").unwrap(),
        ],
        vec![],
    )
    .unwrap()
}
