use crate::domain::ChatMessage;
use serde::{Deserialize, Serialize};

/// Events the client emits on the realtime channel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientEvent {
    JoinRoom(String),
    SendMessage {
        #[serde(rename = "roomId")]
        room_id: String,
        content: String,
    },
}

/// Events the server pushes on the realtime channel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
    ReceiveMessage(ChatMessage),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn join_room_frame() -> Result<(), serde_json::Error> {
        let frame = serde_json::to_value(ClientEvent::JoinRoom("42".to_string()))?;

        assert_eq!(frame, json!({ "event": "join_room", "data": "42" }));
        Ok(())
    }

    #[test]
    fn send_message_frame() -> Result<(), serde_json::Error> {
        let frame = serde_json::to_value(ClientEvent::SendMessage {
            room_id: "42".to_string(),
            content: "On my way".to_string(),
        })?;

        assert_eq!(frame, json!({ "event": "send_message", "data": { "roomId": "42", "content": "On my way" } }));
        Ok(())
    }

    #[test]
    fn receive_message_frame() -> Result<(), serde_json::Error> {
        let frame = r#"{ "event": "receive_message", "data": { "roomId": "42", "senderId": 7, "content": "Hi", "sentAt": "2025-06-01T08:00:00Z" } }"#;

        let event: ServerEvent = serde_json::from_str(frame)?;

        assert_eq!(
            event,
            ServerEvent::ReceiveMessage(ChatMessage {
                room_id: "42".to_string(),
                sender_id: 7,
                content: "Hi".to_string(),
                sent_at: Some("2025-06-01T08:00:00Z".parse().unwrap()),
            })
        );
        Ok(())
    }

    #[test]
    fn unknown_server_events_fail_to_decode() {
        let result = serde_json::from_str::<ServerEvent>(r#"{ "event": "typing", "data": {} }"#);

        assert!(result.is_err());
    }
}
