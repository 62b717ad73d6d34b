use super::*;

// =============================================================
// ServiceId
// =============================================================

#[test]
fn service_id_serializes_as_lowercase_string() {
    assert_eq!(serde_json::to_value(ServiceId::Slack).unwrap(), serde_json::json!("slack"));
    assert_eq!(serde_json::to_value(ServiceId::Github).unwrap(), serde_json::json!("github"));
    let parsed: ServiceId = serde_json::from_str("\"notion\"").unwrap();
    assert_eq!(parsed, ServiceId::Notion);
}

#[test]
fn service_id_as_str_matches_display() {
    for service in ServiceId::ALL {
        assert_eq!(service.to_string(), service.as_str());
    }
}

#[test]
fn service_id_display_names() {
    assert_eq!(ServiceId::Slack.display_name(), "Slack");
    assert_eq!(ServiceId::Notion.display_name(), "Notion");
    assert_eq!(ServiceId::Github.display_name(), "GitHub");
}

// =============================================================
// Labels
// =============================================================

fn recent(origin: BriefOrigin) -> RecentBrief {
    RecentBrief {
        id: 1,
        title: "t".to_owned(),
        source: ServiceId::Slack,
        origin,
        time_ago: "now".to_owned(),
        read_time: "1 min".to_owned(),
    }
}

#[test]
fn origin_label_for_each_origin_kind() {
    let thread = recent(BriefOrigin::Thread { channel: "#design-team".to_owned(), messages: 23 });
    assert_eq!(thread.origin_label(), "#design-team • 23 messages");

    let doc = recent(BriefOrigin::Document { workspace: "Marketing Team".to_owned(), pages: 8 });
    assert_eq!(doc.origin_label(), "Marketing Team • 8 pages");

    let activity = recent(BriefOrigin::Activity { repo: "briefly-app".to_owned(), commits: 12 });
    assert_eq!(activity.origin_label(), "briefly-app • 12 commits");
}

#[test]
fn origin_serializes_with_type_tag() {
    let origin = BriefOrigin::Activity { repo: "r".to_owned(), commits: 2 };
    assert_eq!(
        serde_json::to_value(&origin).unwrap(),
        serde_json::json!({ "type": "activity", "repo": "r", "commits": 2 })
    );
}

#[test]
fn source_item_count_label() {
    let item = SourceItem { name: "#eng".to_owned(), count: SourceCount::Messages(45), active: true };
    assert_eq!(item.count_label(), "45 messages");
    let item = SourceItem { name: "Roadmap".to_owned(), count: SourceCount::Pages(12), active: false };
    assert_eq!(item.count_label(), "12 pages");
}

#[test]
fn weekly_stats_time_saved_has_one_decimal() {
    let stats = WeeklyStats { briefs_created: 12, time_saved_hours: 3.2, briefs_shared: 8 };
    assert_eq!(stats.time_saved_label(), "3.2 hours");
    let stats = WeeklyStats { time_saved_hours: 4.0, ..stats };
    assert_eq!(stats.time_saved_label(), "4.0 hours");
}

#[test]
fn participant_initials_from_first_two_words() {
    let p = Participant { name: "Sarah Anderson".to_owned(), role: String::new(), accent: String::new() };
    assert_eq!(p.initials(), "SA");
    let p = Participant { name: "alex van liu".to_owned(), role: String::new(), accent: String::new() };
    assert_eq!(p.initials(), "AV");
    let p = Participant { name: "   ".to_owned(), role: String::new(), accent: String::new() };
    assert_eq!(p.initials(), "");
}

#[test]
fn brief_content_default_is_empty() {
    let content = BriefContent::default();
    assert!(content.what_happened.is_empty());
    assert!(content.why_it_matters.is_empty());
    assert!(content.next_steps.is_empty());
}
