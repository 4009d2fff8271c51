use serde::{Deserialize, Serialize};
use shield_core::{AnalysisResult, Moderator, ReplyDesk, ShieldError, ShieldResult, normalize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
    Normalize,
}

#[derive(Debug, Deserialize)]
struct CommentRecord {
    text: String,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    result: &'a AnalysisResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply: Option<&'a str>,
}

/// Turns one input line into a comment. JSON lines must be objects with a
/// string `text` field.
pub fn parse_line(line: &[u8], mode: OutputMode) -> ShieldResult<String> {
    let line = std::str::from_utf8(line)
        .map_err(|e| ShieldError::InvalidInput(format!("line is not UTF-8 text: {}", e)))?;
    let line = line.trim_end_matches(['\r', '\n']);

    match mode {
        OutputMode::Json => serde_json::from_str::<CommentRecord>(line)
            .map(|record| record.text)
            .map_err(|e| {
                ShieldError::InvalidInput(format!("expected {{\"text\": \"...\"}}: {}", e))
            }),
        OutputMode::Text | OutputMode::Normalize => Ok(line.to_string()),
    }
}

pub struct Reporter {
    moderator: Moderator,
    replies: Option<(ReplyDesk, u64)>,
    mode: OutputMode,
}

impl Reporter {
    pub fn new(moderator: Moderator, replies: Option<(ReplyDesk, u64)>, mode: OutputMode) -> Self {
        Self {
            moderator,
            replies,
            mode,
        }
    }

    pub fn report(&self, comment: &str) -> serde_json::Result<String> {
        if self.mode == OutputMode::Normalize {
            return Ok(normalize(comment));
        }

        let result = self.moderator.analyze(comment);
        let reply = match (&self.replies, result.is_flagged) {
            (Some((desk, seed)), false) => Some(desk.fallback_reply_seeded(
                comment,
                result.sentiment,
                result.language,
                *seed,
            )),
            _ => None,
        };

        match self.mode {
            OutputMode::Json => serde_json::to_string(&JsonReport {
                result: &result,
                reply: reply.as_deref(),
            }),
            _ => Ok(render_text(comment, &result, reply.as_deref())),
        }
    }
}

fn render_text(comment: &str, result: &AnalysisResult, reply: Option<&str>) -> String {
    let verdict = match &result.reason {
        Some(reason) => format!("FLAGGED ({})", reason),
        None => "clean".to_string(),
    };

    let mut line = format!(
        "{}\t{}\t{}\t{}",
        verdict, result.sentiment, result.language, comment
    );
    if let Some(reply) = reply {
        line.push_str(&format!("\n  reply: {}", reply));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reporter(mode: OutputMode, with_replies: bool) -> Reporter {
        let replies = with_replies.then(|| (ReplyDesk::embedded().unwrap(), 3));
        Reporter::new(Moderator::embedded().unwrap(), replies, mode)
    }

    #[test]
    fn test_parse_text_line() {
        assert_eq!(parse_line(b"hello there\r\n", OutputMode::Text).unwrap(), "hello there");
    }

    #[test]
    fn test_parse_json_line() {
        let text = parse_line(br#"{"text": "go to hell"}"#, OutputMode::Json).unwrap();
        assert_eq!(text, "go to hell");
    }

    #[test]
    fn test_invalid_lines() {
        assert!(matches!(
            parse_line(&[0x68, 0xff], OutputMode::Text),
            Err(ShieldError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_line(br#"{"text": 42}"#, OutputMode::Json),
            Err(ShieldError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_line(br#"{"body": "hi"}"#, OutputMode::Json),
            Err(ShieldError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_json_report() {
        let output = reporter(OutputMode::Json, true).report("go to hell").unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["is_flagged"], true);
        assert_eq!(json["reason"]["kind"], "term");
        assert!(json.get("reply").is_none());

        let output = reporter(OutputMode::Json, true).report("Hello, how are you?").unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["is_flagged"], false);
        assert_eq!(json["language"], "english");
        assert!(json["reply"].is_string());
    }

    #[test]
    fn test_text_report() {
        let output = reporter(OutputMode::Text, false).report("f u c k").unwrap();
        assert!(output.starts_with("FLAGGED (pattern"));

        let output = reporter(OutputMode::Text, false).report("good product").unwrap();
        assert_eq!(output, "clean\tPositive\tenglish\tgood product");
    }

    #[test]
    fn test_normalize_mode() {
        let output = reporter(OutputMode::Normalize, true).report("F.U.C.K!!!").unwrap();
        assert_eq!(output, "f u c kii");
    }
}
