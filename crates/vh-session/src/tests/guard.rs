use crate::{GuardDecision, Route, RouteGuard, SessionState};

use googletest::assert_that;
use googletest::prelude::{eq, none, some};
use vh_core::Identity;

fn logged_in() -> SessionState {
    SessionState {
        identity: Some(Identity::new("1", "a@x.com", "a")),
        loading: false,
        error: None,
    }
}

fn logged_out() -> SessionState {
    SessionState {
        identity: None,
        loading: false,
        error: None,
    }
}

fn protected_routes() -> Vec<Route> {
    vec![
        Route::Home,
        Route::Video {
            id: String::from("1"),
        },
        Route::Upload,
        Route::Profile,
    ]
}

#[test]
fn given_no_identity_when_protected_route_then_redirect_to_login() {
    for route in protected_routes() {
        let decision = RouteGuard::check(&logged_out(), route.clone());

        assert_that!(
            decision,
            eq(&GuardDecision::Redirect {
                to: Route::Login,
                from: route,
            })
        );
    }
}

#[test]
fn given_identity_when_protected_route_then_render_unmodified() {
    for route in protected_routes() {
        let decision = RouteGuard::check(&logged_in(), route.clone());

        assert_that!(decision, eq(&GuardDecision::Render { route }));
    }
}

#[test]
fn given_restore_in_progress_when_protected_route_then_pending_not_redirect() {
    let decision = RouteGuard::check(&SessionState::initial(), Route::Profile);

    assert_that!(
        decision,
        eq(&GuardDecision::Pending {
            requested: Route::Profile
        })
    );
    assert!(!decision.is_redirect());
    assert_that!(decision.target(), none());
}

#[test]
fn given_identity_while_loading_when_protected_route_then_render() {
    let state = SessionState {
        loading: true,
        ..logged_in()
    };

    let decision = RouteGuard::check(&state, Route::Upload);

    assert_that!(
        decision,
        eq(&GuardDecision::Render {
            route: Route::Upload
        })
    );
}

#[test]
fn given_no_identity_when_public_route_then_render() {
    for route in [
        Route::Login,
        Route::Register,
        Route::NotFound {
            path: String::from("/missing"),
        },
    ] {
        let decision = RouteGuard::check(&logged_out(), route.clone());

        assert_that!(decision, eq(&GuardDecision::Render { route }));
    }
}

#[test]
fn given_redirect_when_target_then_login() {
    let decision = RouteGuard::check(&logged_out(), Route::Home);

    assert_that!(decision.target(), some(eq(&Route::Login)));
}

#[test]
fn given_decision_when_serialized_then_tagged_json() {
    let decision = RouteGuard::check(&logged_out(), Route::Profile);

    let json = serde_json::to_value(&decision).unwrap();

    assert_that!(json["decision"].as_str(), some(eq("redirect")));
    assert_that!(json["to"]["view"].as_str(), some(eq("login")));
    assert_that!(json["from"]["view"].as_str(), some(eq("profile")));
}
