use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::pages::home_page::HomePage;
use crate::pages::properties_page::{LuxuryPage, PropertiesPage};
use crate::pages::listing_detail_page::ListingDetailPage;
use crate::pages::contact_page::ContactPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/properties")]
    PropertiesPage {},


    #[route("/luxury")]
    LuxuryPage {},


    #[route("/detail/:listing_id")]
    ListingDetailPage { listing_id: u64 },


    #[route("/contact")]
    ContactPage {},

}

impl Route {
    /// Maps a CMS nav link onto a route, if it points inside the site.
    pub fn from_cms_link(link: &str) -> Option<Self> {
        link.parse::<Route>().ok()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cms_links_map_onto_routes() {
        assert_eq!(Route::from_cms_link("/luxury"), Some(Route::LuxuryPage {}));
        assert_eq!(Route::from_cms_link("/detail/12"), Some(Route::ListingDetailPage { listing_id: 12 }));
        assert_eq!(Route::from_cms_link("/no-such-page"), None);
    }
}
