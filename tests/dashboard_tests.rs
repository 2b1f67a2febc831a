mod common;

#[cfg(test)]
pub mod dashboard_tests {
    use super::common::*;

    use tetrapress::common::PanelError;
    use tetrapress::dashboard::*;
    use tetrapress::models::BlogEntry;
    use tetrapress::session::*;

    fn signed_in() -> SessionContext<MemorySessionStore> {
        let mut session = SessionContext::new(MemorySessionStore::default());
        session.sign_in("token-123", "admin@example.com");
        session
    }

    #[test]
    fn test_shell_starts_on_dashboard() {
        let shell = DashboardShell::new(get_seed_blogs());

        assert_eq!(shell.active_panel(), Panel::Dashboard);
        assert!(shell.is_visible(Panel::Dashboard));
        assert!(!shell.logout_confirm_visible());
        assert!(shell.blog_manager().is_none());
        assert!(shell.draft().is_none());
    }

    #[test]
    fn test_select_panel_shows_exactly_one() {
        let mut shell = DashboardShell::default();
        shell.select_panel(Panel::Leads);

        let visible: Vec<Panel> = Panel::ALL
            .into_iter()
            .filter(|p| shell.is_visible(*p))
            .collect();
        assert_eq!(visible, vec![Panel::Leads]);
    }

    #[test]
    fn test_selecting_panel_leaves_logout_dialog_alone() {
        let mut shell = DashboardShell::default();
        shell.request_logout();
        shell.select_panel(Panel::Users);

        assert!(shell.logout_confirm_visible());
        assert_eq!(shell.active_panel(), Panel::Users);
    }

    #[test]
    fn test_confirm_delete_removes_pending_blog() {
        let mut shell = DashboardShell::new(get_seed_blogs());
        shell.select_panel(Panel::BlogManage);

        let manager = shell.blog_manager_mut().unwrap();
        manager.request_delete(1);
        assert_eq!(manager.pending_delete(), Some(1));

        let removed = manager.confirm_delete();
        assert_eq!(removed, Some(BlogEntry::new(1, "Learn React")));
        assert_eq!(manager.blogs(), &[BlogEntry::new(2, "Next.js Basics")]);
        assert_eq!(manager.pending_delete(), None);
    }

    #[test]
    fn test_cancel_delete_keeps_list() {
        let mut manager = BlogManager::new(get_seed_blogs());
        manager.request_delete(2);
        manager.cancel_delete();

        assert_eq!(manager.pending_delete(), None);
        assert_eq!(manager.blogs(), get_seed_blogs().as_slice());
        assert_eq!(manager.confirm_delete(), None);
        assert_eq!(manager.blogs().len(), 2);
    }

    #[test]
    fn test_confirm_delete_of_missing_id_clears_pending() {
        let mut manager = BlogManager::new(get_seed_blogs());
        manager.request_delete(42);

        assert_eq!(manager.confirm_delete(), None);
        assert_eq!(manager.pending_delete(), None);
        assert_eq!(manager.blogs().len(), 2);
    }

    #[test]
    fn test_new_delete_request_replaces_pending() {
        let mut manager = BlogManager::new(get_seed_blogs());
        manager.request_delete(1);
        manager.request_delete(2);

        assert_eq!(manager.pending_delete(), Some(2));
        assert_eq!(manager.confirm_delete().map(|b| b.id), Some(2));
    }

    #[test]
    fn test_switching_panels_remounts_local_state() {
        let mut shell = DashboardShell::new(get_seed_blogs());
        shell.select_panel(Panel::BlogManage);
        {
            let manager = shell.blog_manager_mut().unwrap();
            manager.request_delete(1);
            manager.confirm_delete();
            manager.request_delete(2);
        }

        // Re-selecting the mounted panel keeps its state.
        shell.select_panel(Panel::BlogManage);
        assert_eq!(shell.blog_manager().unwrap().blogs().len(), 1);

        shell.select_panel(Panel::Dashboard);
        assert!(shell.blog_manager().is_none());

        shell.select_panel(Panel::BlogManage);
        let manager = shell.blog_manager().unwrap();
        assert_eq!(manager.blogs(), get_seed_blogs().as_slice());
        assert_eq!(manager.pending_delete(), None);
    }

    #[test]
    fn test_draft_is_reset_after_leaving_blogs_panel() {
        let mut shell = DashboardShell::default();
        shell.select_panel(Panel::Blogs);
        shell
            .draft_mut()
            .unwrap()
            .update(Some("Title".into()), None);
        assert_eq!(shell.draft().unwrap().title, "Title");
        assert_eq!(shell.draft().unwrap().content, "");

        shell.select_panel(Panel::Settings);
        shell.select_panel(Panel::Blogs);
        assert!(shell.draft().unwrap().is_empty());
    }

    #[test]
    fn test_logout_cancel_hides_dialog_and_keeps_session() {
        let mut shell = DashboardShell::default();
        let session = signed_in();

        shell.request_logout();
        assert!(shell.logout_confirm_visible());
        shell.cancel_logout();

        assert!(!shell.logout_confirm_visible());
        assert!(session.is_signed_in());
    }

    #[test]
    fn test_confirm_logout_clears_session_and_navigates() {
        let mut shell = DashboardShell::default();
        let mut session = signed_in();
        let mut navigator = RecordingNavigator::default();

        shell.request_logout();
        shell.confirm_logout(&mut session, &mut navigator);

        assert_eq!(navigator.visited, vec![LOGIN_ROUTE.to_string()]);
        assert_eq!(session.store().get(ADMIN_TOKEN_KEY), None);
        assert_eq!(session.store().get(ADMIN_ACCOUNT_KEY), None);
        assert!(!shell.logout_confirm_visible());
    }

    #[test]
    fn test_teardown_on_empty_session_succeeds() {
        let mut session = SessionContext::new(MemorySessionStore::default());
        session.teardown();
        assert!(!session.is_signed_in());
        assert_eq!(session.account(), None);
    }

    #[test]
    fn test_panel_from_str() {
        assert_eq!("leads".parse::<Panel>().unwrap(), Panel::Leads);
        assert_eq!("blog-manage".parse::<Panel>().unwrap(), Panel::BlogManage);
        assert_eq!("Blog Manage".parse::<Panel>().unwrap(), Panel::BlogManage);
        assert_eq!(" SETTINGS ".parse::<Panel>().unwrap(), Panel::Settings);
        assert_eq!(
            "reports".parse::<Panel>(),
            Err(PanelError::Unknown("reports".to_string()))
        );
    }

    #[test]
    fn test_panel_labels_follow_sidebar_order() {
        let labels: Vec<&str> = Panel::ALL.iter().map(Panel::label).collect();
        assert_eq!(
            labels,
            vec!["Dashboard", "Users", "Leads", "Blog Manage", "Blogs", "Settings"]
        );
    }

    #[test]
    fn test_confirmation_take_resets() {
        let mut confirm = Confirmation::default();
        assert!(!confirm.is_pending());

        confirm.request("x");
        assert_eq!(confirm.pending(), Some(&"x"));
        assert_eq!(confirm.take(), Some("x"));
        assert_eq!(confirm, Confirmation::Idle);
        assert_eq!(confirm.take(), None);
    }
}
