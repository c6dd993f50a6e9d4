use crate::constants::{LOGOS_TRACK_ID, MENU_NAV, MENU_OPEN_CLASS, MENU_TOGGLE};
use crate::dom;
use web_sys as web;

/// Hamburger button toggles the header navigation.
pub fn wire_menu_toggle(document: &web::Document) -> anyhow::Result<()> {
    let toggle = dom::query(document, MENU_TOGGLE)?;
    let nav = dom::query(document, MENU_NAV)?;
    dom::add_listener(&toggle, "click", move |_| {
        _ = nav.class_list().toggle(MENU_OPEN_CLASS);
    })
}

/// Append a clone of every logo so the marquee animation can loop without a
/// gap. Returns how many logos were cloned.
pub fn duplicate_logo_track(document: &web::Document) -> anyhow::Result<usize> {
    let track = document
        .get_element_by_id(LOGOS_TRACK_ID)
        .ok_or_else(|| dom::SetupError::MissingElement {
            selector: format!("#{}", LOGOS_TRACK_ID),
        })?;
    // `children()` is live; snapshot it before appending.
    let children = track.children();
    let originals: Vec<web::Element> = (0..children.length())
        .filter_map(|i| children.item(i))
        .collect();
    for logo in &originals {
        let clone = logo
            .clone_node_with_deep(true)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        track
            .append_child(&clone)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    Ok(originals.len())
}
