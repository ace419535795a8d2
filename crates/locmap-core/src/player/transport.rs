use crate::error::TransportError;

/// Delivers a request body to a URL
pub trait Transport {
    /// Sends `body` as a POST and returns the response status code
    fn post(&self, url: &str, body: String) -> Result<u16, TransportError>;
}

/// Blocking HTTP transport; the response body is never read
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder().build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn post(&self, url: &str, body: String) -> Result<u16, TransportError> {
        let response = self.client.post(url).body(body).send()?;
        Ok(response.status().as_u16())
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post(&self, url: &str, body: String) -> Result<u16, TransportError> {
        (**self).post(url, body)
    }
}
