use qdesk_core::{board::FlightSourceError, flight::RawFlightRecord};
use serde::Deserialize;

/// result code reported by the flight status service on success
pub const SUCCESS_RESULT_CODE: &str = "00";

/// json envelope wrapping the arrival listing:
/// `{ response: { header: { resultCode, resultMsg }, body: { items: [...] } } }`
#[derive(Debug, Deserialize)]
pub struct ArrivalsEnvelope {
    pub response: ArrivalsResponse,
}

#[derive(Debug, Deserialize)]
pub struct ArrivalsResponse {
    pub header: ResponseHeader,
    #[serde(default)]
    pub body: Option<ArrivalsBody>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseHeader {
    #[serde(rename = "resultCode")]
    pub result_code: String,
    #[serde(rename = "resultMsg", default)]
    pub result_msg: String,
}

#[derive(Debug, Deserialize)]
pub struct ArrivalsBody {
    #[serde(default)]
    pub items: Option<ArrivalItems>,
}

/// shapes observed for `body.items`. the service sends a plain array for
/// json requests, but the xml-derived `{ item: ... }` wrapping and an empty
/// string for an empty listing also occur.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ArrivalItems {
    List(Vec<RawFlightRecord>),
    Wrapped { item: Vec<RawFlightRecord> },
    WrappedSingle { item: Box<RawFlightRecord> },
    Blank(String),
}

impl ArrivalsEnvelope {
    /// the arrival records of a successful response. a result code other than
    /// [SUCCESS_RESULT_CODE] is a protocol failure carrying the service message.
    pub fn into_records(self) -> Result<Vec<RawFlightRecord>, FlightSourceError> {
        let ArrivalsResponse { header, body } = self.response;
        if header.result_code != SUCCESS_RESULT_CODE {
            return Err(FlightSourceError::Protocol {
                code: header.result_code,
                message: header.result_msg,
            });
        }
        let body = body.ok_or_else(|| {
            FlightSourceError::Malformed(String::from("response is missing its body"))
        })?;
        match body.items {
            None => Ok(vec![]),
            Some(ArrivalItems::List(items)) => Ok(items),
            Some(ArrivalItems::Wrapped { item }) => Ok(item),
            Some(ArrivalItems::WrappedSingle { item }) => Ok(vec![*item]),
            Some(ArrivalItems::Blank(s)) if s.trim().is_empty() => Ok(vec![]),
            Some(ArrivalItems::Blank(s)) => Err(FlightSourceError::Malformed(format!(
                "unexpected items value '{s}'"
            ))),
        }
    }
}

/// decodes a flight status response body into the raw arrival listing.
///
/// the service answers some failures (unregistered or expired keys, traffic
/// limits) with an xml document even when json was requested; those are
/// reported as protocol failures using the xml reason code.
pub fn decode_arrivals(body: &str) -> Result<Vec<RawFlightRecord>, FlightSourceError> {
    let trimmed = body.trim_start();
    if trimmed.starts_with('<') {
        return Err(xml_failure(trimmed));
    }
    let envelope: ArrivalsEnvelope =
        serde_json::from_str(body).map_err(|e| FlightSourceError::Malformed(e.to_string()))?;
    envelope.into_records()
}

/// xml error document of the open api gateway:
/// `<OpenAPI_ServiceResponse><cmmMsgHeader>...</cmmMsgHeader></OpenAPI_ServiceResponse>`
#[derive(Debug, Deserialize)]
struct ServiceErrorDocument {
    #[serde(rename = "cmmMsgHeader")]
    header: ServiceErrorHeader,
}

#[derive(Debug, Deserialize)]
struct ServiceErrorHeader {
    #[serde(rename = "errMsg", default)]
    err_msg: Option<XmlText>,
    #[serde(rename = "returnAuthMsg", default)]
    return_auth_msg: Option<XmlText>,
    #[serde(rename = "returnReasonCode")]
    return_reason_code: XmlText,
}

/// element text, ignoring any attributes on the element
#[derive(Debug, Deserialize)]
struct XmlText {
    #[serde(rename = "$text", default)]
    value: String,
}

fn xml_failure(body: &str) -> FlightSourceError {
    match quick_xml::de::from_str::<ServiceErrorDocument>(body) {
        Ok(ServiceErrorDocument { header }) => {
            let message = header
                .return_auth_msg
                .or(header.err_msg)
                .map(|text| text.value.trim().to_string())
                .unwrap_or_default();
            FlightSourceError::Protocol {
                code: header.return_reason_code.value.trim().to_string(),
                message,
            }
        }
        Err(e) => {
            log::debug!("xml response is not a service error document: {e}");
            FlightSourceError::Malformed(String::from(
                "expected a json response but received xml",
            ))
        }
    }
}
