use serde::Serialize;

pub const STATUS_MESSAGE: &str = "Hi. This will appear when I restart the container.";

/// Body returned by `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusPayload {
    pub status: &'static str,
    pub message: &'static str,
    pub altered: bool,
    pub rebooted: bool,
}

impl StatusPayload {
    pub fn new() -> Self {
        Self {
            status: "ok",
            message: STATUS_MESSAGE,
            altered: true,
            rebooted: true,
        }
    }
}

impl Default for StatusPayload {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_fields_in_declaration_order() {
        let json = serde_json::to_string(&StatusPayload::new()).unwrap();
        assert_eq!(
            json,
            r#"{"status":"ok","message":"Hi. This will appear when I restart the container.","altered":true,"rebooted":true}"#
        );
    }
}
