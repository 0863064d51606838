use crate::events::AppEvent;
use async_channel::Sender;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Reads line commands from stdin and forwards them as events. Unknown
/// lines are logged and dropped.
pub async fn run_reader(tx: Sender<AppEvent>) {
    let reader = BufReader::new(tokio::io::stdin());
    let mut lines = reader.lines();

    while let Ok(Some(line)) = lines.next_line().await {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_command(line) {
            Some(event) => {
                let quit = matches!(event, AppEvent::Quit);
                if tx.send(event).await.is_err() || quit {
                    break;
                }
            }
            None => log::warn!("unknown command: '{line}'"),
        }
    }
}

/// One event per line: `enter 2`, `leave`, `click 1`, `toggle 첼로`,
/// `confirm`, `back`, `resize 1200 800`, `fonts`, `show`, `quit`.
pub fn parse_command(line: &str) -> Option<AppEvent> {
    let mut parts = line.split_whitespace();
    let event = match parts.next()? {
        "enter" => AppEvent::Enter(parts.next()?.parse().ok()?),
        "leave" => AppEvent::Leave,
        "click" => AppEvent::Click(parts.next()?.parse().ok()?),
        "toggle" => AppEvent::Toggle(parts.next()?.to_string()),
        "confirm" => AppEvent::Confirm,
        "back" => AppEvent::Back,
        "resize" => {
            let width = parts.next()?.parse().ok()?;
            let height = parts.next()?.parse().ok()?;
            AppEvent::Resize(width, height)
        }
        "fonts" => AppEvent::FontsReady,
        "show" => AppEvent::Show,
        "quit" | "exit" => AppEvent::Quit,
        _ => return None,
    };
    if parts.next().is_some() {
        return None;
    }
    Some(event)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_parsing() {
        assert!(matches!(parse_command("enter 2"), Some(AppEvent::Enter(2))));
        assert!(matches!(parse_command("leave"), Some(AppEvent::Leave)));
        assert!(matches!(parse_command("click 0"), Some(AppEvent::Click(0))));
        assert!(matches!(parse_command("confirm"), Some(AppEvent::Confirm)));
        assert!(matches!(parse_command("back"), Some(AppEvent::Back)));
        assert!(matches!(parse_command("fonts"), Some(AppEvent::FontsReady)));
        assert!(matches!(parse_command("show"), Some(AppEvent::Show)));
        assert!(matches!(parse_command("quit"), Some(AppEvent::Quit)));
        assert!(matches!(parse_command("exit"), Some(AppEvent::Quit)));

        match parse_command("toggle 콘트라베이스") {
            Some(AppEvent::Toggle(name)) => assert_eq!(name, "콘트라베이스"),
            other => panic!("unexpected: {other:?}"),
        }

        match parse_command("resize 1200 800") {
            Some(AppEvent::Resize(w, h)) => {
                assert_eq!(w, 1200.0);
                assert_eq!(h, 800.0);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_commands_are_rejected() {
        let cases = vec![
            "",
            "unknown",
            "enter",
            "enter two",
            "enter 1 2",
            "click -1",
            "resize 1200",
            "resize wide tall",
            "leave now",
        ];

        for line in cases {
            assert!(parse_command(line).is_none(), "accepted '{line}'");
        }
    }
}
