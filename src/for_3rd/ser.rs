//! Serialization of Float128.
//! Serialization to a string uses decimal radix.

use crate::num::Float128;
use serde::{Serialize, Serializer};

impl Serialize for Float128 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {

    use crate::num::Float128;
    use serde_json::to_string;

    #[test]
    fn to_json() {
        assert_eq!(
            to_string(&Float128::ONE).unwrap(),
            "\"1.00000000000000000000000000000000000e+00\""
        );
        assert_eq!(to_string(&Float128::INF_NEG).unwrap(), "\"-inf\"");
        assert_eq!(to_string(&Float128::NAN).unwrap(), "\"nan\"");
        assert_eq!(
            to_string(&Float128::from_f64(-0.25)).unwrap(),
            "\"-2.50000000000000000000000000000000000e-01\""
        );
    }
}
