//! Tests for system roles

use edt_domain::SystemRole;

#[test]
fn test_default_role_is_user() {
    assert_eq!(SystemRole::default(), SystemRole::User);
}

#[test]
fn test_display_names() {
    assert_eq!(SystemRole::User.to_string(), "User");
    assert_eq!(SystemRole::Admin.to_string(), "Admin");
    assert_eq!(SystemRole::SuperAdmin.to_string(), "Super Admin");
}

#[test]
fn test_serde_uses_variant_names() {
    let json = serde_json::to_string(&SystemRole::SuperAdmin).unwrap();
    assert_eq!(json, "\"SuperAdmin\"");
    let role: SystemRole = serde_json::from_str("\"Admin\"").unwrap();
    assert_eq!(role, SystemRole::Admin);
}
