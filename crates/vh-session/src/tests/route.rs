use crate::Route;

use googletest::assert_that;
use googletest::prelude::eq;

#[test]
fn given_known_paths_when_parse_then_matching_routes() {
    assert_that!(Route::parse("/"), eq(&Route::Home));
    assert_that!(Route::parse("/login"), eq(&Route::Login));
    assert_that!(Route::parse("/register"), eq(&Route::Register));
    assert_that!(Route::parse("/upload"), eq(&Route::Upload));
    assert_that!(Route::parse("/profile"), eq(&Route::Profile));
    assert_that!(
        Route::parse("/video/42"),
        eq(&Route::Video {
            id: String::from("42")
        })
    );
}

#[test]
fn given_trailing_slash_or_query_when_parse_then_ignored() {
    assert_that!(Route::parse("/profile/"), eq(&Route::Profile));
    assert_that!(
        Route::parse("/video/7?t=30#comments"),
        eq(&Route::Video {
            id: String::from("7")
        })
    );
}

#[test]
fn given_unknown_path_when_parse_then_not_found_keeps_path() {
    assert_that!(
        Route::parse("/settings"),
        eq(&Route::NotFound {
            path: String::from("/settings")
        })
    );
}

#[test]
fn given_video_without_id_when_parse_then_not_found() {
    assert!(matches!(Route::parse("/video/"), Route::NotFound { .. }));
    assert!(matches!(Route::parse("/video/1/extra"), Route::NotFound { .. }));
}

#[test]
fn given_relative_path_when_parse_then_not_found() {
    assert!(matches!(Route::parse("login"), Route::NotFound { .. }));
}

#[test]
fn given_route_when_path_then_parses_back_to_same_route() {
    let routes = [
        Route::Login,
        Route::Register,
        Route::Home,
        Route::Video {
            id: String::from("3"),
        },
        Route::Upload,
        Route::Profile,
    ];

    for route in routes {
        assert_that!(Route::parse(&route.path()), eq(&route));
    }
}

#[test]
fn given_routes_when_is_protected_then_only_app_views() {
    assert!(Route::Home.is_protected());
    assert!(Route::Upload.is_protected());
    assert!(Route::Profile.is_protected());
    assert!(
        Route::Video {
            id: String::from("1")
        }
        .is_protected()
    );
    assert!(!Route::Login.is_protected());
    assert!(!Route::Register.is_protected());
    assert!(
        !Route::NotFound {
            path: String::from("/nope")
        }
        .is_protected()
    );
}
