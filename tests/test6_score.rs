use rusty_hoops::model::{Category, Score, Team};
use serde_json::json;

#[test]
fn test6_score_cells() {
    assert_eq!(Score::from_cell("").ok(), Some(Score::Pending));
    assert_eq!(Score::from_cell(" 104 ").ok(), Some(Score::Final(104)));
    assert_eq!(Score::from_cell("0").ok(), Some(Score::Final(0)));
    assert!(Score::from_cell("-3").is_err());
    assert!(Score::from_cell("104.5").is_err());
    assert_eq!(Score::Final(0).points(), Some(0));
    assert_eq!(Score::Pending.points(), None);
}

#[test]
fn test6_team_score_decoding() -> Result<(), serde_json::Error> {
    let decode = |score: serde_json::Value| {
        serde_json::from_value::<Team>(json!({
            "credentials": "BOS", "name": "Celtics", "side": "home", "score": score
        }))
    };

    assert_eq!(decode(json!(99))?.score, Some(Score::Final(99)));
    assert_eq!(decode(json!(""))?.score, Some(Score::Pending));
    assert_eq!(decode(json!("87"))?.score, Some(Score::Final(87)));
    // null takes the Option path
    assert_eq!(decode(json!(null))?.score, None);
    assert!(decode(json!(-1)).is_err());
    assert!(decode(json!([1])).is_err());

    let without: Team = serde_json::from_value(json!({
        "credentials": "BOS", "name": "Celtics", "side": "away"
    }))?;
    assert_eq!(without.score, None);
    Ok(())
}

#[test]
fn test6_category_names() {
    assert_eq!(Category::Future.to_string(), "future");
    assert_eq!(serde_json::to_value(Category::Past).ok(), Some(json!("past")));
    assert_ne!(Category::Future.cache_file_name(), Category::Past.cache_file_name());
    assert!(Category::Past.freshness_window() < Category::Future.freshness_window());
}
