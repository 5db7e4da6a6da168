//! SOAP 1.2 envelope handling and HTTP transport for the eMS service agent.

use crate::adapters::xml::XmlElement;
use crate::utils::error::{EmsError, Result};
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

pub const SOAP_12_NS: &str = "http://www.w3.org/2003/05/soap-envelope";
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema";

pub const DEFAULT_SERVICE_NAMESPACE: &str = "http://schemas.mailworx.info/";

/// Wraps an operation element into a complete SOAP 1.2 document.
pub fn build_envelope(operation: XmlElement) -> String {
    let envelope = XmlElement::new("soap12:Envelope")
        .with_attr("xmlns:xsi", XSI_NS)
        .with_attr("xmlns:xsd", XSD_NS)
        .with_attr("xmlns:soap12", SOAP_12_NS)
        .with_child(XmlElement::new("soap12:Body").with_child(operation));

    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>{}",
        envelope.to_xml_string()
    )
}

/// `action` parameter of the SOAP 1.2 content type.
pub fn action_uri(namespace: &str, operation: &str) -> String {
    if namespace.ends_with('/') {
        format!("{}{}", namespace, operation)
    } else {
        format!("{}/{}", namespace, operation)
    }
}

/// Returns `(code, message)` of a SOAP 1.2 or 1.1 fault.
pub fn extract_fault(root: &XmlElement) -> Option<(String, String)> {
    let fault = root.find("Fault")?;

    // SOAP 1.2: <Code><Value/></Code><Reason><Text/></Reason>
    let code = fault
        .child("Code")
        .and_then(|c| c.child_text("Value"))
        .or_else(|| fault.child_text("faultcode"))
        .unwrap_or("Unknown");
    let message = fault
        .child("Reason")
        .and_then(|r| r.child_text("Text"))
        .or_else(|| fault.child_text("faultstring"))
        .unwrap_or("Unknown SOAP fault");

    Some((code.trim().to_string(), message.trim().to_string()))
}

/// Extracts `<{operation}Result>` from a response document.
///
/// A missing or nil result element is a null response (`None`).
pub fn extract_result(xml: &str, operation: &str) -> Result<Option<XmlElement>> {
    let root = XmlElement::parse(xml)?;

    if let Some((code, message)) = extract_fault(&root) {
        return Err(EmsError::SoapFault { code, message });
    }

    let body = root
        .child("Body")
        .ok_or_else(|| EmsError::decode("Envelope", "missing SOAP body"))?;

    let response_name = format!("{}Response", operation);
    let response = body
        .child(&response_name)
        .ok_or_else(|| EmsError::decode(&response_name, "missing response element"))?;

    let result_name = format!("{}Result", operation);
    Ok(response
        .child(&result_name)
        .filter(|result| !result.is_nil())
        .cloned())
}

/// HTTP POST transport for SOAP 1.2 calls.
#[derive(Debug)]
pub struct SoapTransport {
    client: Client,
    endpoint: String,
    namespace: String,
    request_counter: AtomicU64,
}

impl SoapTransport {
    pub fn new(endpoint: &str, namespace: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(15))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            namespace: namespace.to_string(),
            request_counter: AtomicU64::new(0),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn set_endpoint(&mut self, endpoint: &str) {
        self.endpoint = endpoint.to_string();
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Sends the operation element and returns its result element.
    pub async fn call(&self, operation: &str, payload: XmlElement) -> Result<Option<XmlElement>> {
        let req_id = self.request_counter.fetch_add(1, Ordering::Relaxed) + 1;
        let body = build_envelope(payload);
        let content_type = format!(
            "application/soap+xml; charset=utf-8; action=\"{}\"",
            action_uri(&self.namespace, operation)
        );
        let content_type = HeaderValue::from_str(&content_type).map_err(|e| EmsError::ConfigError {
            message: format!("Invalid SOAP action for {}: {}", operation, e),
        })?;

        tracing::debug!(
            "eMS request #{} {} to {} ({} bytes)",
            req_id,
            operation,
            self.endpoint,
            body.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        tracing::debug!(
            "eMS response #{}: status={}, {} bytes",
            req_id,
            status,
            text.len()
        );
        tracing::trace!("eMS response #{} body:\n{}", req_id, text);

        if !status.is_success() {
            // ASMX 以 HTTP 500 回傳 SOAP fault
            if let Ok(root) = XmlElement::parse(&text) {
                if let Some((code, message)) = extract_fault(&root) {
                    tracing::error!("❌ {} failed with SOAP fault: {}", operation, message);
                    return Err(EmsError::SoapFault { code, message });
                }
            }
            return Err(EmsError::HttpStatusError {
                status: status.as_u16(),
                body: text,
            });
        }

        extract_result(&text, operation)
    }
}
