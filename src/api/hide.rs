use crate::{CodecOptions, SynapseEncoder, SynapseError};

pub fn prepare<'a>() -> HideApi<'a> {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi<'a> {
    carrier: Option<&'a [f64]>,
    payload: Option<Vec<u8>>,
    key: Option<Vec<u8>>,
    options: CodecOptions,
}

impl<'a> HideApi<'a> {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_carrier(mut self, carrier: &'a [f64]) -> Self {
        self.carrier = Some(carrier);
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.payload = Some(message.as_bytes().to_vec());
        self
    }

    pub fn with_payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Set the key deriving the permutation seed
    pub fn with_key(mut self, key: impl AsRef<[u8]>) -> Self {
        self.key = Some(key.as_ref().to_vec());
        self
    }

    pub fn execute(self) -> Result<Vec<f64>, SynapseError> {
        let Some(carrier) = self.carrier else {
            return Err(SynapseError::MissingCarrier);
        };
        let Some(payload) = self.payload else {
            return Err(SynapseError::MissingPayload);
        };
        let Some(key) = self.key else {
            return Err(SynapseError::MissingKey);
        };

        SynapseEncoder::with_options(self.options).hide(carrier, &payload, key)
    }
}
