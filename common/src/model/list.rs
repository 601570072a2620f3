use serde::Deserialize;

/// Body of a list endpoint.
///
/// Admin list routes answer either with a bare JSON array or with the array
/// wrapped under `data`; both decode to the same `Vec`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
}

impl<T> ListEnvelope<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListEnvelope::Bare(items) | ListEnvelope::Wrapped { data: items } => items,
        }
    }
}

/// Decodes a list body into its records.
pub fn decode_list<T>(body: &str) -> Result<Vec<T>, serde_json::Error>
where
    T: for<'de> Deserialize<'de>,
{
    serde_json::from_str::<ListEnvelope<T>>(body).map(ListEnvelope::into_vec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_bare_and_wrapped_lists() {
        let bare: Vec<u32> = decode_list("[1,2,3]").unwrap();
        let wrapped: Vec<u32> = decode_list(r#"{"data":[4,5],"total":2}"#).unwrap();
        assert_eq!(bare, vec![1, 2, 3]);
        assert_eq!(wrapped, vec![4, 5]);
    }

    #[test]
    fn rejects_unrelated_shapes() {
        assert!(decode_list::<u32>(r#"{"items":[1]}"#).is_err());
    }
}
