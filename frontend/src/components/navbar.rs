//! Top navigation bar built from the CMS header.

use common::catalog::{NavLink, SiteHeader};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdHome};

use crate::api::catalog_api::fetch_header;
use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;

/// Shared navbar component.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display: flex;
                flex-direction: column;
                width: 100%;
                min-height: 100vh;
                font-family: 'Poppins', sans-serif;
                background: #F5F6F8;
            ",

            div {
                id: "x-nav-topbar",
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 32px;
                    height: 70px;
                    padding: 0px 40px;
                    background-color: #1C212D;
                    color: white;
                ",
                NavbarContents {}
            }

            div {
                id: "x-page-container",
                style: "flex-grow: 1; min-height: 100px;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

/// Renders fallback links while the header loads or when it fails.
#[component]
fn NavbarContents() -> Element {
    let header = use_resource(move || fetch_header());
    let header = match &*header.read() {
        Some(Ok(h)) => h.clone(),
        Some(Err(e)) => {
            dioxus::logger::tracing::warn!("header unavailable: {}", e);
            SiteHeader::default()
        }
        None => SiteHeader::default(),
    };
    let links = if header.nav_links.is_empty() { default_links() } else { header.nav_links.clone() };

    rsx! {
        Link {
            to: Route::HomePage {},
            if header.logo_url.is_empty() {
                span { style: "color: white;", Icon { icon: MdHome, style: "width: 32px; height: 32px;" } }
            } else {
                img { src: "{header.logo_url}", style: "height: 40px;" }
            }
        }
        div { style: "flex-grow: 1;" }
        for link in links {
            NavbarLink { key: "{link.id}", link }
        }
    }
}

fn default_links() -> Vec<NavLink> {
    [("Home", "/"), ("Properties", "/properties"), ("Luxury", "/luxury"), ("Contact", "/contact")]
        .into_iter()
        .enumerate()
        .map(|(i, (label, link))| NavLink { id: i as u64, label: label.to_string(), link: link.to_string() })
        .collect()
}

#[component]
fn NavbarLink(link: NavLink) -> Element {
    let style = "color: white; text-decoration: none; font-size: 15px;";
    match Route::from_cms_link(&link.link) {
        Some(route) => rsx! {
            span { style, Link { to: route, "{link.label}" } }
        },
        None => rsx! {
            a { href: "{link.link}", style, "{link.label}" }
        },
    }
}
