use form_validation::field::{FieldState, ARIA_INVALID_ATTR, INVALID_STATE_CLASS};
use form_validation::settings::*;
use form_validation::validation::{validate_backend_url, validate_font_scale};

#[cfg(test)]
mod draft_validation_tests {
    use super::*;

    fn draft_with_timezone(timezone: &str) -> SettingsDraft {
        SettingsDraft {
            user_timezone: timezone.to_string(),
            ..SettingsDraft::default()
        }
    }

    #[test]
    fn test_default_draft_passes() {
        assert!(validate_settings_draft(&SettingsDraft::default()).is_empty());
    }

    #[test]
    fn test_remote_client_with_url_passes() {
        let draft = SettingsDraft {
            mode: DeploymentMode::RemoteClient,
            backend_url: "http://localhost:8000".to_string(),
            ..SettingsDraft::default()
        };
        assert!(validate_settings_draft(&draft).is_empty());
    }

    #[test]
    fn test_remote_client_without_url_fails() {
        let draft = SettingsDraft {
            mode: DeploymentMode::RemoteClient,
            backend_url: "   ".to_string(),
            ..SettingsDraft::default()
        };

        let issues = validate_settings_draft(&draft);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, SettingsField::BackendUrl);
        assert!(!issues[0].message.is_empty());
    }

    #[test]
    fn test_remote_server_without_url_passes() {
        let draft = SettingsDraft {
            mode: DeploymentMode::RemoteServer,
            ..SettingsDraft::default()
        };
        assert!(validate_settings_draft(&draft).is_empty());
    }

    #[test]
    fn test_malformed_urls_fail_in_any_mode() {
        let bad_urls = vec![
            "example.com",
            "ftp://example.com",
            "http://",
            "http://exa mple.com",
        ];

        for url in bad_urls {
            let draft = SettingsDraft {
                backend_url: url.to_string(),
                ..SettingsDraft::default()
            };
            let issues = validate_settings_draft(&draft);
            assert_eq!(issues.len(), 1, "Should reject URL: {}", url);
            assert_eq!(issues[0].field, SettingsField::BackendUrl);
        }
    }

    #[test]
    fn test_timezone_issues_carry_the_candidate() {
        let issues = validate_settings_draft(&draft_with_timezone("Not/AZone123"));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, SettingsField::UserTimezone);
        assert!(issues[0].message.contains("Not/AZone123"));
    }

    #[test]
    fn test_blank_timezone_is_not_an_issue() {
        assert!(validate_settings_draft(&draft_with_timezone("")).is_empty());
        assert!(validate_settings_draft(&draft_with_timezone("   ")).is_empty());
    }

    #[test]
    fn test_font_scale_bounds() {
        for scale in [85.0, 100.0, 120.0] {
            let draft = SettingsDraft {
                ui_font_scale: scale,
                ..SettingsDraft::default()
            };
            assert!(
                validate_settings_draft(&draft).is_empty(),
                "Should accept scale: {}",
                scale
            );
        }

        for scale in [84.0, 121.0, f64::NAN] {
            let draft = SettingsDraft {
                ui_font_scale: scale,
                ..SettingsDraft::default()
            };
            let issues = validate_settings_draft(&draft);
            assert_eq!(issues.len(), 1, "Should reject scale: {}", scale);
            assert_eq!(issues[0].field, SettingsField::UiFontScale);
        }
    }

    #[test]
    fn test_every_field_can_fail_at_once() {
        let draft = SettingsDraft {
            mode: DeploymentMode::RemoteClient,
            backend_url: String::new(),
            user_timezone: "Nowhere".to_string(),
            ui_font_scale: 0.0,
        };

        let issues = validate_settings_draft(&draft);
        assert_eq!(issues.len(), 3);
    }

    #[test]
    fn test_issue_messages_match_scalar_validators() {
        // Draft-level messages come from the same validators callers use directly
        let draft = SettingsDraft {
            backend_url: "example.com".to_string(),
            ui_font_scale: 300.0,
            ..SettingsDraft::default()
        };

        let issues = validate_settings_draft(&draft);
        let url_err = validate_backend_url("example.com").unwrap_err();
        let scale_err = validate_font_scale(300.0).unwrap_err();

        assert_eq!(issues[0].message, url_err.to_string());
        assert_eq!(issues[1].message, scale_err.to_string());
    }

    #[test]
    fn test_apply_then_reset_restores_fields() {
        let mut url_field = FieldState::new();
        let mut tz_field = FieldState::new();
        let mut scale_field = FieldState::new();

        let draft = SettingsDraft {
            mode: DeploymentMode::RemoteClient,
            backend_url: String::new(),
            user_timezone: "Nowhere".to_string(),
            ui_font_scale: 0.0,
        };
        let issues = validate_settings_draft(&draft);

        let mut form = SettingsForm {
            backend_url: Some(&mut url_field),
            user_timezone: Some(&mut tz_field),
            ui_font_scale: Some(&mut scale_field),
        };
        apply_validation_issues(&mut form, &issues);
        reset_settings_validation(&mut form);
        drop(form);

        for field in [&url_field, &tz_field, &scale_field] {
            assert!(!field.has_class(INVALID_STATE_CLASS));
            assert_eq!(field.attribute(ARIA_INVALID_ATTR), None);
        }
    }

    #[test]
    fn test_partial_form_is_tolerated() {
        let mut tz_field = FieldState::new();
        let issues = validate_settings_draft(&draft_with_timezone("Nowhere"));

        let mut form = SettingsForm {
            backend_url: None,
            user_timezone: Some(&mut tz_field),
            ui_font_scale: None,
        };
        apply_validation_issues(&mut form, &issues);
        drop(form);

        assert!(tz_field.has_class(INVALID_STATE_CLASS));
    }
}
