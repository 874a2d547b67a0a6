//! JSON output envelope.

use serde::Serialize;

#[derive(Serialize)]
struct Envelope<'a, T: Serialize> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

fn render<T: Serialize>(envelope: &Envelope<'_, T>, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(envelope)
    } else {
        serde_json::to_string(envelope)
    }
}

/// `{"success":true,"data":...}`
pub fn success<T: Serialize>(data: &T, pretty: bool) -> serde_json::Result<String> {
    render(
        &Envelope {
            success: true,
            data: Some(data),
            message: None,
        },
        pretty,
    )
}

/// `{"success":false,"message":...}`
pub fn failure(message: &str, pretty: bool) -> String {
    let envelope: Envelope<'_, ()> = Envelope {
        success: false,
        data: None,
        message: Some(message),
    };
    // Only strings are serialized here.
    render(&envelope, pretty).unwrap_or_else(|_| String::from(r#"{"success":false}"#))
}
