use crate::{CodecOptions, SynapseDecoder, SynapseError};

pub fn prepare<'a>() -> UnveilApi<'a> {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi<'a> {
    carrier: Option<&'a [f64]>,
    payload_size: Option<usize>,
    key: Option<Vec<u8>>,
    options: CodecOptions,
}

impl<'a> UnveilApi<'a> {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_carrier(mut self, carrier: &'a [f64]) -> Self {
        self.carrier = Some(carrier);
        self
    }

    /// Set the expected payload size in bytes, as declared at hide time
    pub fn with_payload_size(mut self, size: usize) -> Self {
        self.payload_size = Some(size);
        self
    }

    /// Set the key deriving the permutation seed
    pub fn with_key(mut self, key: impl AsRef<[u8]>) -> Self {
        self.key = Some(key.as_ref().to_vec());
        self
    }

    pub fn execute(self) -> Result<Vec<u8>, SynapseError> {
        let Some(carrier) = self.carrier else {
            return Err(SynapseError::MissingCarrier);
        };
        let Some(payload_size) = self.payload_size else {
            return Err(SynapseError::MissingPayload);
        };
        let Some(key) = self.key else {
            return Err(SynapseError::MissingKey);
        };

        SynapseDecoder::with_options(self.options).extract(carrier, payload_size, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn illustrate_api_usage() {
        let weights = vec![0.25_f64; 1000];
        let encoded = crate::api::hide::prepare()
            .with_carrier(&weights)
            .with_message("Hello, World!")
            .with_key("SuperSecret42")
            .execute()
            .expect("Failed to hide message in weights");

        let message = crate::api::unveil::prepare()
            .with_carrier(&encoded)
            .with_payload_size(13)
            .with_key("SuperSecret42")
            .execute()
            .expect("Failed to unveil message from weights");

        assert_eq!(message, b"Hello, World!");
    }

    #[test]
    fn missing_payload_size_is_reported() {
        let weights = vec![0.0_f64; 100];
        let result = prepare().with_carrier(&weights).with_key("k").execute();
        assert!(matches!(result, Err(SynapseError::MissingPayload)));
    }
}
