use serde::{Deserialize, Serialize};

/// Integer field that also accepts its decimal string form.
///
/// Browser forms post select values as strings, so `"2"`, `2` and `2.0` must
/// all land as category 2. Fractional values are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "IntOrString")]
pub struct LenientInt(pub i32);

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Float(f64),
    Str(String),
}

impl TryFrom<IntOrString> for LenientInt {
    type Error = String;

    fn try_from(value: IntOrString) -> Result<Self, Self::Error> {
        let parsed = match value {
            IntOrString::Int(v) => i32::try_from(v).ok(),
            IntOrString::Float(v) => whole_i32(v),
            IntOrString::Str(ref s) => s.trim().parse::<i32>().ok(),
        };

        parsed.map(LenientInt).ok_or_else(|| match value {
            IntOrString::Int(v) => format!("Integer {v} is out of range"),
            IntOrString::Float(v) => format!("Number {v} is not a whole i32"),
            IntOrString::Str(s) => format!("Wrong value {s}, can not parse to integer"),
        })
    }
}

fn whole_i32(v: f64) -> Option<i32> {
    if v.fract() == 0.0 && v >= f64::from(i32::MIN) && v <= f64::from(i32::MAX) {
        Some(v as i32)
    } else {
        None
    }
}

impl From<LenientInt> for i32 {
    fn from(value: LenientInt) -> Self {
        value.0
    }
}

/// Text field that takes any JSON scalar and keeps its textual form,
/// so `123` is stored as `"123"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Scalar")]
pub struct LenientText(pub String);

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl From<Scalar> for LenientText {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Text(s) => LenientText(s),
            Scalar::Number(n) => LenientText(n.to_string()),
            Scalar::Bool(b) => LenientText(b.to_string()),
        }
    }
}

impl From<LenientText> for String {
    fn from(value: LenientText) -> Self {
        value.0
    }
}
