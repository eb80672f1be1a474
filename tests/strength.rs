use strongpass::pass::{Strength, Tier, score};

#[test]
fn empty_string() {
    assert_eq!(
        score(""),
        Strength {
            score: 0,
            tier: Tier::Weak
        }
    );
}

#[test]
fn eight_char_boundary() {
    assert_eq!(
        score("password"),
        Strength {
            score: 44,
            tier: Tier::Medium
        }
    );
    assert_eq!(
        score("passwor"),
        Strength {
            score: 21,
            tier: Tier::Weak
        }
    );
}

#[test]
fn twenty_chars_all_classes_clamps() {
    assert_eq!(
        score("Tr0ub4dor&3-horse!Zz"),
        Strength {
            score: 100,
            tier: Tier::Strong
        }
    );
}

#[test]
fn more_classes_never_score_lower() {
    let samples = [
        ("aaaaaaaaaa", "aaaaaaaAAA"),
        ("aaaaaaaAAA", "aaaaaaAA11"),
        ("aaaaaaAA11", "aaaaaA1!!!"),
    ];
    for (fewer, more) in samples {
        assert_eq!(fewer.len(), more.len());
        assert!(score(more).score >= score(fewer).score, "{fewer} vs {more}");
    }
}

#[test]
fn classes_counted_from_content_only() {
    // Spaces and non-ASCII add length but no class.
    assert_eq!(score("pass word").score, 9 * 3 + 20);
    assert_eq!(score("ñññññññññ").score, 9 * 3);
}

#[test]
fn tiers_follow_score() {
    for input in ["", "abc", "abcdefgh", "abcdefghij1", "Abcdefghij1!"] {
        let s = score(input);
        assert_eq!(s.tier, Tier::from_score(s.score));
    }
}
