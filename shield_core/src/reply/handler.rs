use std::path::Path;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::dto::{RejectReason, ReplyBucket, ReplyIntent, ReplyTemplates, ReplyVerdict};
use super::helpers::{mentions_any, word_count};
use crate::config::helpers::{parse_ron, read_config, require_non_empty};
use crate::error::{ShieldError, ShieldResult};
use crate::heuristics::dto::{Language, Sentiment};

const EMBEDDED_REPLIES: &str = include_str!("../../assets/replies.ron");

impl ReplyTemplates {
    pub fn embedded() -> ShieldResult<Self> {
        Self::from_ron_str(EMBEDDED_REPLIES)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> ShieldResult<Self> {
        let content = read_config(path.as_ref())?;
        let templates = Self::from_ron_str(&content)?;

        log::info!("Loaded reply templates from {:?}", path.as_ref());

        Ok(templates)
    }

    pub fn from_ron_str(content: &str) -> ShieldResult<Self> {
        let templates: ReplyTemplates = parse_ron(content)?;
        templates.validate()?;

        log::info!(
            "Loaded {} reply templates, {} problematic phrases",
            templates.buckets().map(|(_, b)| b.bangla.len() + b.english.len()).sum::<usize>(),
            templates.problematic_phrases.len()
        );

        Ok(templates)
    }

    pub fn validate(&self) -> ShieldResult<()> {
        for (name, bucket) in self.buckets() {
            require_non_empty(&bucket.bangla, &format!("{}.bangla", name))?;
            require_non_empty(&bucket.english, &format!("{}.english", name))?;
        }

        if self.max_words == 0 {
            return Err(ShieldError::Config("max_words must be positive".to_string()));
        }

        Ok(())
    }

    fn buckets(&self) -> impl Iterator<Item = (&'static str, &ReplyBucket)> {
        [
            ("greeting", &self.greeting),
            ("application", &self.application),
            ("positive", &self.positive),
            ("negative", &self.negative),
            ("neutral", &self.neutral),
        ]
        .into_iter()
    }
}

/// Picks canned replies by intent and checks generated ones.
#[derive(Debug, Clone)]
pub struct ReplyDesk {
    templates: ReplyTemplates,
}

impl ReplyDesk {
    pub fn new(mut templates: ReplyTemplates) -> ShieldResult<Self> {
        templates.validate()?;

        for list in [
            &mut templates.greeting_triggers,
            &mut templates.application_triggers,
            &mut templates.problematic_phrases,
        ] {
            for entry in list.iter_mut() {
                *entry = entry.trim().to_lowercase();
            }
            list.retain(|entry| !entry.is_empty());
        }

        Ok(Self { templates })
    }

    pub fn embedded() -> ShieldResult<Self> {
        Self::new(ReplyTemplates::embedded()?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> ShieldResult<Self> {
        Self::new(ReplyTemplates::from_path(path)?)
    }

    /// Greetings win over application questions, which win over sentiment.
    pub fn intent(&self, comment: &str, sentiment: Sentiment) -> ReplyIntent {
        let comment_lower = comment.to_lowercase();

        if mentions_any(&comment_lower, &self.templates.greeting_triggers) {
            ReplyIntent::Greeting
        } else if mentions_any(&comment_lower, &self.templates.application_triggers) {
            ReplyIntent::Application
        } else {
            ReplyIntent::Sentiment(sentiment)
        }
    }

    pub fn fallback_reply<R: Rng + ?Sized>(
        &self,
        comment: &str,
        sentiment: Sentiment,
        language: Language,
        rng: &mut R,
    ) -> &str {
        let bucket = match self.intent(comment, sentiment) {
            ReplyIntent::Greeting => &self.templates.greeting,
            ReplyIntent::Application => &self.templates.application,
            ReplyIntent::Sentiment(Sentiment::Positive) => &self.templates.positive,
            ReplyIntent::Sentiment(Sentiment::Negative) => &self.templates.negative,
            ReplyIntent::Sentiment(Sentiment::Neutral) => &self.templates.neutral,
        };

        bucket
            .for_language(language)
            .choose(rng)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Deterministic variant of [`ReplyDesk::fallback_reply`].
    pub fn fallback_reply_seeded(
        &self,
        comment: &str,
        sentiment: Sentiment,
        language: Language,
        seed: u64,
    ) -> String {
        let mut rng = StdRng::seed_from_u64(seed);
        self.fallback_reply(comment, sentiment, language, &mut rng)
            .to_string()
    }

    pub fn validate_reply(&self, reply: &str) -> ReplyVerdict {
        let words = word_count(reply);
        if words <= self.templates.lenient_word_count {
            return ReplyVerdict::Accepted;
        }

        let reply_lower = reply.to_lowercase();
        if let Some(phrase) = self
            .templates
            .problematic_phrases
            .iter()
            .find(|phrase| reply_lower.contains(phrase.as_str()))
        {
            log::debug!("Reply rejected, contains {:?}", phrase);
            return ReplyVerdict::Rejected(RejectReason::ProblematicPhrase(phrase.clone()));
        }

        if words > self.templates.max_words {
            log::debug!("Reply rejected, {} words", words);
            return ReplyVerdict::Rejected(RejectReason::TooLong {
                words,
                limit: self.templates.max_words,
            });
        }

        ReplyVerdict::Accepted
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn desk() -> ReplyDesk {
        ReplyDesk::embedded().unwrap()
    }

    #[test]
    fn test_intent_priority() {
        let desk = desk();
        assert_eq!(desk.intent("Hi, how do I apply?", Sentiment::Neutral), ReplyIntent::Greeting);
        assert_eq!(
            desk.intent("How do I apply for the job?", Sentiment::Neutral),
            ReplyIntent::Application
        );
        assert_eq!(
            desk.intent("this is great", Sentiment::Positive),
            ReplyIntent::Sentiment(Sentiment::Positive)
        );
        assert_eq!(
            desk.intent("চাকরির খবর কী?", Sentiment::Neutral),
            ReplyIntent::Application
        );
    }

    #[test]
    fn test_reply_comes_from_the_right_bucket() {
        let desk = desk();
        let templates = ReplyTemplates::embedded().unwrap();

        for seed in 0..16 {
            let reply = desk.fallback_reply_seeded("hello", Sentiment::Positive, Language::English, seed);
            assert!(templates.greeting.english.contains(&reply));

            let reply = desk.fallback_reply_seeded("অসাধারণ", Sentiment::Positive, Language::Bangla, seed);
            assert!(templates.positive.bangla.contains(&reply));

            let reply = desk.fallback_reply_seeded("not good", Sentiment::Negative, Language::Mixed, seed);
            assert!(templates.negative.english.contains(&reply));

            let reply = desk.fallback_reply_seeded("ok", Sentiment::Neutral, Language::English, seed);
            assert!(templates.neutral.english.contains(&reply));
        }
    }

    #[test]
    fn test_seeded_reply_is_deterministic() {
        let desk = desk();
        for seed in [0, 7, 42, u64::MAX] {
            let first = desk.fallback_reply_seeded("nice", Sentiment::Positive, Language::English, seed);
            let second = desk.fallback_reply_seeded("nice", Sentiment::Positive, Language::English, seed);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_validate_reply() {
        let desk = desk();

        assert_eq!(desk.validate_reply("As an AI, thanks!"), ReplyVerdict::Accepted);
        assert_eq!(
            desk.validate_reply("Sorry, as an AI I cannot check your order status."),
            ReplyVerdict::Rejected(RejectReason::ProblematicPhrase("i cannot".to_string()))
        );

        let long = vec!["word"; 51].join(" ");
        assert_eq!(
            desk.validate_reply(&long),
            ReplyVerdict::Rejected(RejectReason::TooLong { words: 51, limit: 50 })
        );
        assert_eq!(
            desk.validate_reply("Thanks for reaching out, please inbox us for details."),
            ReplyVerdict::Accepted
        );
    }

    #[test]
    fn test_templates_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(EMBEDDED_REPLIES.as_bytes()).unwrap();

        let templates = ReplyTemplates::from_path(file.path()).unwrap();
        assert_eq!(templates.max_words, 50);
        assert_eq!(templates.lenient_word_count, 5);
    }

    #[test]
    fn test_empty_bucket_is_rejected() {
        let mut templates = ReplyTemplates::embedded().unwrap();
        templates.neutral.bangla.clear();
        assert!(matches!(templates.validate(), Err(ShieldError::Config(_))));
        assert!(ReplyDesk::new(templates).is_err());
    }
}
