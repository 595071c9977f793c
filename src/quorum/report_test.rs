use anyhow::Result;

use super::*;
use crate::error::CorosyncError;
use crate::fixtures::HEALTHY_REPORT;

const QUORATE_REPORT: &str = "
Quorum information
------------------
Date:             Tue Oct 29 14:11:19 2019
Quorum provider:  corosync_votequorum
Nodes:            3
Node ID:          2
Ring ID:          1/12
Quorate:          {}

Votequorum information
----------------------
";

const VOTES_REPORT: &str = "
Quorate:          Yes

Votequorum information
----------------------
Expected votes:   12345
Highest expected: 12345
Total votes:      {}
Quorum:           12345
Flags:            Quorate

Membership information
----------------------
";

const VOTES_EXPECTED_REPORT: &str = "
Quorate:          Yes

Votequorum information
----------------------
Expected votes:   {}
Highest expected: 12345
Total votes:      12345
Quorum:           12345
Flags:            Quorate

Membership information
----------------------
";

fn report(template: &str, val: &str) -> String {
    template.replacen("{}", val, 1)
}

#[test]
fn quorate_parses_yes_and_no() -> Result<()> {
    let yes = quorate(&report(QUORATE_REPORT, "Yes"))?;
    assert!(yes, "expected cluster to be quorate");

    let no = quorate(&report(QUORATE_REPORT, "No"))?;
    assert!(!no, "expected cluster to not be quorate");
    Ok(())
}

#[test]
fn quorate_rejects_unknown_token() {
    let res = quorate(&report(QUORATE_REPORT, "Something invalid"));
    assert!(
        matches!(res, Err(CorosyncError::InvalidOutput { field: "quorate" })),
        "expected invalid output error, got {:?}",
        res
    );
}

#[test]
fn votes_parses_digits() -> Result<()> {
    let val = votes(&report(VOTES_REPORT, "3"))?;
    assert_eq!(val, 3, "expected total votes to be 3, got {}", val);

    let val = votes(&report(VOTES_REPORT, "134"))?;
    assert_eq!(val, 134, "expected total votes to be 134, got {}", val);
    Ok(())
}

#[test]
fn votes_rejects_non_numeric() {
    let res = votes(&report(VOTES_REPORT, "invalid"));
    assert!(
        matches!(res, Err(CorosyncError::InvalidOutput { field: "total votes" })),
        "expected invalid output error, got {:?}",
        res
    );
}

#[test]
fn votes_expected_parses_digits() -> Result<()> {
    let val = votes_expected(&report(VOTES_EXPECTED_REPORT, "3"))?;
    assert_eq!(val, 3, "expected expected votes to be 3, got {}", val);

    let val = votes_expected(&report(VOTES_EXPECTED_REPORT, "134"))?;
    assert_eq!(val, 134, "expected expected votes to be 134, got {}", val);
    Ok(())
}

#[test]
fn votes_expected_rejects_non_numeric() {
    let res = votes_expected(&report(VOTES_EXPECTED_REPORT, "invalid"));
    assert!(
        matches!(res, Err(CorosyncError::InvalidOutput { field: "expected votes" })),
        "expected invalid output error, got {:?}",
        res
    );
}

#[test]
fn votes_overflow_is_a_number_error() {
    let res = votes(&report(VOTES_REPORT, "99999999999999999999"));
    assert!(
        matches!(res, Err(CorosyncError::InvalidNumber { field: "total votes", .. })),
        "expected invalid number error, got {:?}",
        res
    );
}

#[test]
fn invalid_output_message_carries_field_prefix() {
    let err = match votes_expected("") {
        Err(err) => err,
        Ok(val) => panic!("expected error from empty report, got {}", val),
    };
    assert!(err.is_invalid_output(), "expected invalid output error, got {:?}", err);
    assert_eq!(err.to_string(), "error getting expected votes: invalid corosync-quorumtool output");
}

#[test]
fn text_report_parses_healthy_report() -> Result<()> {
    let status = TextReport.parse(HEALTHY_REPORT)?;
    let expected = QuorumStatus {
        quorate: true,
        votes: 3,
        votes_expected: 3,
        nodes: vec![],
    };
    assert_eq!(status, expected, "unexpected status parsed from healthy report");
    Ok(())
}

#[test]
fn text_report_matches_fields_outside_their_section() -> Result<()> {
    let status = TextReport.parse("Total votes: 2\nExpected votes: 5\nsomething Quorate: No")?;
    assert!(!status.quorate, "expected cluster to not be quorate");
    assert_eq!(status.votes, 2, "unexpected total votes");
    assert_eq!(status.votes_expected, 5, "unexpected expected votes");
    Ok(())
}

#[test]
fn quorate_rejects_tokens_which_only_start_with_yes_or_no() {
    for token in ["Nope", "Yesterday", "Yes_"] {
        let res = quorate(&report(QUORATE_REPORT, token));
        assert!(
            matches!(res, Err(CorosyncError::InvalidOutput { field: "quorate" })),
            "expected invalid output error for token {:?}, got {:?}",
            token,
            res
        );
    }
}

#[test]
fn votes_reject_tokens_which_only_start_with_digits() {
    let res = votes(&report(VOTES_REPORT, "3abc"));
    assert!(
        matches!(res, Err(CorosyncError::InvalidOutput { field: "total votes" })),
        "expected invalid output error, got {:?}",
        res
    );

    let res = votes_expected(&report(VOTES_EXPECTED_REPORT, "7x"));
    assert!(
        matches!(res, Err(CorosyncError::InvalidOutput { field: "expected votes" })),
        "expected invalid output error, got {:?}",
        res
    );
}

#[test]
fn votes_expected_overflow_is_a_number_error() {
    let res = votes_expected(&report(VOTES_EXPECTED_REPORT, "99999999999999999999"));
    assert!(
        matches!(res, Err(CorosyncError::InvalidNumber { field: "expected votes", .. })),
        "expected invalid number error, got {:?}",
        res
    );
}
