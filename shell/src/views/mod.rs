//! Pages rendered as serializable view models.

pub mod form;
pub mod home;
pub mod profile;
pub mod upload;
pub mod video;
pub mod video_card;

use crate::views::{
    form::FormPage, home::HomePage, profile::ProfilePage, upload::UploadPage, video::VideoPage,
};

use serde::Serialize;
use vh_core::MockCatalog;
use vh_session::{Route, SessionState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Page {
    Login(FormPage),
    Register(FormPage),
    Home(HomePage),
    Video(VideoPage),
    Upload(UploadPage),
    Profile(ProfilePage),
    NotFound { path: String, message: &'static str },
}

impl Page {
    /// Renders the view for a route the guard has already admitted.
    pub fn render(route: &Route, session: &SessionState, catalog: &MockCatalog) -> Self {
        let identity = session.identity.as_ref();

        match route {
            Route::Login => Self::Login(FormPage::login(session.error.clone())),
            Route::Register => Self::Register(FormPage::register(session.error.clone())),
            Route::Home => Self::Home(HomePage::render(identity, catalog)),
            Route::Video { id } => match VideoPage::render(id, catalog) {
                Some(page) => Self::Video(page),
                None => Self::not_found(route.path()),
            },
            Route::Upload => Self::Upload(UploadPage::render()),
            Route::Profile => match identity {
                Some(identity) => Self::Profile(ProfilePage::render(identity, catalog)),
                None => Self::Login(FormPage::login(session.error.clone())),
            },
            Route::NotFound { path } => Self::not_found(path.clone()),
        }
    }

    fn not_found(path: String) -> Self {
        Self::NotFound {
            path,
            message: "Page not found",
        }
    }
}
