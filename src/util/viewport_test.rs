use super::*;

#[test]
fn mobile_query_is_one_below_breakpoint() {
    assert_eq!(mobile_query(768), "(max-width: 767px)");
}

#[test]
fn mobile_query_zero_breakpoint_saturates() {
    assert_eq!(mobile_query(0), "(max-width: 0px)");
}

#[test]
fn mobile_query_matches_shared_breakpoint() {
    let expected = format!("(max-width: {}px)", motion::consts::MOBILE_BREAKPOINT_PX - 1);
    assert_eq!(mobile_query(motion::consts::MOBILE_BREAKPOINT_PX), expected);
}
