use super::*;

#[test]
fn integrations_cover_every_service_in_order() {
    let ids: Vec<ServiceId> = StaticProvider.integrations().iter().map(|i| i.id).collect();
    assert_eq!(ids, ServiceId::ALL.to_vec());
}

#[test]
fn only_slack_is_marked_popular() {
    let popular: Vec<ServiceId> = StaticProvider
        .integrations()
        .into_iter()
        .filter(|i| i.popular)
        .map(|i| i.id)
        .collect();
    assert_eq!(popular, vec![ServiceId::Slack]);
}

#[test]
fn generate_brief_is_deterministic() {
    let first = StaticProvider.generate_brief();
    let second = StaticProvider.generate_brief();
    assert_eq!(first, second);
}

#[test]
fn generated_content_fills_all_sections() {
    let content = StaticProvider.generate_brief().content;
    assert!(content.what_happened.starts_with("Design team reviewed user feedback"));
    assert!(content.why_it_matters.starts_with("Mobile conversion rate dropped 15%"));
    assert_eq!(content.next_steps.lines().count(), 5);
    assert!(content.next_steps.lines().all(|line| line.starts_with('•')));
}

#[test]
fn pending_meta_matches_generated_meta() {
    assert_eq!(StaticProvider.pending_brief(), StaticProvider.generate_brief().meta);
}

#[test]
fn generated_brief_lists_key_participants() {
    let names: Vec<String> = StaticProvider
        .generate_brief()
        .participants
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Sarah Anderson", "Mike Johnson", "Alex Liu"]);
}

#[test]
fn recent_briefs_use_one_origin_per_service() {
    let briefs = StaticProvider.recent_briefs();
    assert_eq!(briefs.len(), 3);
    assert_eq!(briefs[0].origin_label(), "#design-team • 23 messages");
    assert_eq!(briefs[1].origin_label(), "Marketing Team • 8 pages");
    assert_eq!(briefs[2].origin_label(), "briefly-app • 12 commits");
}

#[test]
fn available_sources_have_three_items_each() {
    let sources = StaticProvider.available_sources();
    assert_eq!(sources.len(), 2);
    assert!(sources.iter().all(|s| s.items.len() == 3));
    assert_eq!(sources[0].service, ServiceId::Slack);
    assert_eq!(sources[1].service, ServiceId::Notion);
}

#[test]
fn data_provider_default_delegates_to_static_provider() {
    let provider = DataProvider::default();
    assert_eq!(provider.weekly_stats(), StaticProvider.weekly_stats());
    assert_eq!(provider.sample_brief(), StaticProvider.sample_brief());
}

#[test]
fn data_provider_accepts_custom_implementation() {
    struct Empty;
    impl BriefProvider for Empty {
        fn integrations(&self) -> Vec<Integration> {
            Vec::new()
        }
        fn recent_briefs(&self) -> Vec<RecentBrief> {
            Vec::new()
        }
        fn available_sources(&self) -> Vec<AvailableSource> {
            Vec::new()
        }
        fn weekly_stats(&self) -> WeeklyStats {
            WeeklyStats { briefs_created: 0, time_saved_hours: 0.0, briefs_shared: 0 }
        }
        fn sample_brief(&self) -> SampleBrief {
            StaticProvider.sample_brief()
        }
        fn pending_brief(&self) -> BriefMeta {
            StaticProvider.pending_brief()
        }
        fn generate_brief(&self) -> GeneratedBrief {
            StaticProvider.generate_brief()
        }
    }

    let provider = DataProvider::new(Empty);
    assert!(provider.integrations().is_empty());
    assert_eq!(provider.weekly_stats().briefs_created, 0);
}
