use crate::core::SlideAxis;
use crate::slider::SliderSelectors;

// DOM hooks the page markup provides.

pub const SERVICES_SLIDER: SliderSelectors = SliderSelectors {
    name: "services",
    container: ".slider-container",
    track: ".slider",
    slide: ".service-slide",
    dots: ".dots-container",
    dot_class: "dot",
    axis: SlideAxis::Vertical,
};

pub const WHAT_WE_DO_SLIDER: SliderSelectors = SliderSelectors {
    name: "what-we-do",
    container: ".what-we-do-container",
    track: "#wwdSlider",
    slide: ".wwd-slide",
    dots: ".wwd-dots-container",
    dot_class: "wwd-dot",
    axis: SlideAxis::Vertical,
};

// Header
pub const MENU_TOGGLE: &str = ".menu-toggle";
pub const MENU_NAV: &str = "header nav";
pub const MENU_OPEN_CLASS: &str = "show";

// Partner logo marquee; children are duplicated once so the CSS loop is seamless
pub const LOGOS_TRACK_ID: &str = "logosTrack";

// Global object the page exposes to own the three.js scene
pub const STAGE_GLOBAL: &str = "skylineStage";
