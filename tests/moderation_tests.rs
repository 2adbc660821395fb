//! Integration tests for term matching and the moderation boundary.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use moderation_engine::{
    moderate_text, moderate_value, FileTermSource, MatchMode, MatchStrategy, MatcherOptions,
    ModerationError, ModerationOutcome, Moderator, ModeratorOptions, StaticTermSource,
    TermMatcher, TermSourceErrorKind,
};
use serde_json::json;

/// Inputs used by the property checks below
fn sample_inputs() -> Vec<&'static str> {
    vec![
        "",
        " ",
        "\t\n\r",
        "this is a badword example",
        "have a nice day",
        "SPAM alert",
        "spammer community",
        "spam is spam",
        "spam, spam. spam!",
        "  Hate   OFFENSIVE\tasshole\n",
        "antispam hatemail",
        "BadWord badword BADWORD",
        "no-spam zone",
    ]
}

fn matchers() -> Vec<TermMatcher> {
    vec![
        TermMatcher::new(&StaticTermSource, MatcherOptions::default()).unwrap(),
        TermMatcher::new(
            &StaticTermSource,
            MatcherOptions::new().with_strategy(MatchStrategy::Automaton),
        )
        .unwrap(),
    ]
}

fn temp_path(dir: &str, file: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(dir);
    let _ = fs::create_dir_all(&dir);
    dir.join(file)
}

mod scenario_tests {
    use super::*;

    #[test]
    fn test_badword_example() {
        let outcome = moderate_text("this is a badword example").unwrap();
        assert_eq!(
            outcome,
            ModerationOutcome {
                allowed: false,
                bad_words: Some(vec!["badword".to_string()]),
            }
        );
    }

    #[test]
    fn test_clean_text() {
        let outcome = moderate_text("have a nice day").unwrap();
        assert_eq!(outcome, ModerationOutcome::allowed());
        assert_eq!(serde_json::to_value(&outcome).unwrap(), json!({"allowed": true}));
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(moderate_text("").unwrap(), ModerationOutcome::allowed());
    }

    #[test]
    fn test_uppercase_text() {
        let outcome = moderate_text("SPAM alert").unwrap();
        assert!(!outcome.allowed);
        assert_eq!(outcome.bad_words, Some(vec!["spam".to_string()]));
    }

    #[test]
    fn test_substring_does_not_trigger() {
        assert_eq!(
            moderate_text("spammer community").unwrap(),
            ModerationOutcome::allowed()
        );
    }

    #[test]
    fn test_non_string_rejected() {
        let values = [
            json!(42),
            json!(null),
            json!(true),
            json!(["spam"]),
            json!({"text": "spam"}),
        ];
        for value in values {
            let err = moderate_value(&value).unwrap_err();
            assert!(
                matches!(err, ModerationError::InvalidInputType { .. }),
                "value {} gave {:?}",
                value,
                err
            );
        }
    }

    #[test]
    fn test_string_value_accepted() {
        let outcome = moderate_value(&json!("spam is spam")).unwrap();
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({"allowed": false, "badWords": ["spam", "spam"]})
        );
    }

    #[test]
    fn test_attached_punctuation_is_not_stripped() {
        // Whitespace-only tokenization: "spam," is not the token "spam".
        assert_eq!(
            moderate_text("spam, spam.").unwrap(),
            ModerationOutcome::allowed()
        );
    }
}

mod property_tests {
    use super::*;

    #[test]
    fn test_contains_agrees_with_find() {
        for matcher in matchers() {
            for input in sample_inputs() {
                assert_eq!(
                    matcher.contains_prohibited_term(input),
                    !matcher.find_prohibited_terms(input).is_empty(),
                    "input {:?}",
                    input
                );
            }
        }
    }

    #[test]
    fn test_case_invariance() {
        for matcher in matchers() {
            for input in sample_inputs() {
                let found = matcher.find_prohibited_terms(input);
                assert_eq!(found, matcher.find_prohibited_terms(&input.to_ascii_uppercase()));
                assert_eq!(found, matcher.find_prohibited_terms(&input.to_ascii_lowercase()));
            }
        }
    }

    #[test]
    fn test_idempotence() {
        for matcher in matchers() {
            for input in sample_inputs() {
                assert_eq!(
                    matcher.find_prohibited_terms(input),
                    matcher.find_prohibited_terms(input)
                );
                assert_eq!(
                    matcher.contains_prohibited_term(input),
                    matcher.contains_prohibited_term(input)
                );
            }
        }
    }

    #[test]
    fn test_strategies_agree() {
        let all = matchers();
        for input in sample_inputs() {
            assert_eq!(
                all[0].find_prohibited_terms(input),
                all[1].find_prohibited_terms(input),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_order_and_duplicates() {
        for matcher in matchers() {
            assert_eq!(
                matcher.find_prohibited_terms("spam is spam"),
                vec!["spam", "spam"]
            );
            assert_eq!(
                matcher.find_prohibited_terms("BadWord badword BADWORD"),
                vec!["badword", "badword", "badword"]
            );
        }
    }

    #[test]
    fn test_allowed_never_lists_words() {
        for input in sample_inputs() {
            let outcome = moderate_text(input).unwrap();
            match outcome.bad_words {
                None => assert!(outcome.allowed),
                Some(words) => {
                    assert!(!outcome.allowed);
                    assert!(!words.is_empty());
                }
            }
        }
    }
}

mod substring_mode_tests {
    use super::*;

    #[test]
    fn test_substring_mode_is_explicit() {
        let options = MatcherOptions::new()
            .with_strategy(MatchStrategy::Automaton)
            .with_mode(MatchMode::Substring);
        let matcher = TermMatcher::new(&StaticTermSource, options).unwrap();

        assert_eq!(
            matcher.find_prohibited_terms("spammer community"),
            vec!["spam"]
        );
        assert_eq!(matcher.find_prohibited_terms("hatemail"), vec!["hate"]);
        assert!(!matcher.contains_prohibited_term("have a nice day"));
    }
}

mod term_source_tests {
    use super::*;

    #[test]
    fn test_text_file_source() {
        let path = temp_path("moderation_engine_it_text", "terms.txt");
        fs::write(&path, "# custom\nlorem\nIPSUM\n").unwrap();

        let matcher =
            TermMatcher::new(&FileTermSource::new(&path), MatcherOptions::default()).unwrap();
        assert_eq!(matcher.term_count(), 2);
        assert_eq!(
            matcher.find_prohibited_terms("Lorem ipsum dolor"),
            vec!["lorem", "ipsum"]
        );

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_json_file_source() {
        let path = temp_path("moderation_engine_it_json", "terms.json");
        fs::write(&path, r#"["lorem", "ipsum"]"#).unwrap();

        let moderator = Moderator::new(
            Box::new(FileTermSource::new(&path)),
            ModeratorOptions::default(),
        );
        let outcome = moderator.moderate("IPSUM").unwrap();
        assert_eq!(outcome.bad_words, Some(vec!["ipsum".to_string()]));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_malformed_file_fails_closed() {
        let path = temp_path("moderation_engine_it_malformed", "terms.json");
        fs::write(&path, r#"{"terms": "spam"}"#).unwrap();

        let moderator = Moderator::new(
            Box::new(FileTermSource::new(&path)),
            ModeratorOptions::default(),
        );
        let err = moderator.moderate("spam").unwrap_err();
        assert!(matches!(
            err,
            ModerationError::TermSource {
                kind: TermSourceErrorKind::Malformed,
                ..
            }
        ));
        assert!(!moderator.is_initialized());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_fails_closed() {
        let moderator = Moderator::new(
            Box::new(FileTermSource::new("/nonexistent/moderation/terms.txt")),
            ModeratorOptions::default(),
        );
        let err = moderator.moderate("have a nice day").unwrap_err();
        assert!(matches!(
            err,
            ModerationError::TermSource {
                kind: TermSourceErrorKind::FileError,
                ..
            }
        ));
    }
}

mod concurrency_tests {
    use super::*;

    #[test]
    fn test_concurrent_first_use() {
        let moderator = Arc::new(Moderator::new(
            Box::new(StaticTermSource),
            ModeratorOptions::new().with_cache_size(8),
        ));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let moderator = Arc::clone(&moderator);
                thread::spawn(move || {
                    let text = if i % 2 == 0 { "spam and hate" } else { "nice day" };
                    (i, moderator.moderate(text).unwrap())
                })
            })
            .collect();

        for handle in handles {
            let (i, outcome) = handle.join().unwrap();
            if i % 2 == 0 {
                assert_eq!(
                    outcome.bad_words,
                    Some(vec!["spam".to_string(), "hate".to_string()])
                );
            } else {
                assert_eq!(outcome, ModerationOutcome::allowed());
            }
        }

        assert_eq!(moderator.matcher().unwrap().term_count(), 5);
    }

    #[test]
    fn test_shared_matcher_across_threads() {
        let matcher = Arc::new(
            TermMatcher::new(
                &StaticTermSource,
                MatcherOptions::new().with_strategy(MatchStrategy::Automaton),
            )
            .unwrap(),
        );

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let matcher = Arc::clone(&matcher);
                thread::spawn(move || matcher.find_prohibited_terms("offensive OFFENSIVE text"))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), vec!["offensive", "offensive"]);
        }
    }
}
