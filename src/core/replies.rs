//! Reply templates. Each function builds one outbound message; wording that
//! varies per deployment comes in through [`BusinessConfig`].

use crate::config::toml_config::BusinessConfig;
use crate::domain::model::{Category, OutboundReply, ReplyOption, ServiceRegion};

pub const ORDER_FOOD: &str = "order_food";
pub const TRACK_ORDER: &str = "track_order";
pub const CONTACT_SUPPORT: &str = "contact_support";

pub const MENU_FOOTER: &str = "You can type HI anytime to return to the main menu.";
pub const CATEGORY_FOOTER: &str = "Select an item below 👇";
pub const VIEW_ITEMS: &str = "View Items";
pub const VIEW_RESTAURANTS: &str = "View Restaurants";

fn option(id: &str, title: &str) -> ReplyOption {
    ReplyOption {
        id: id.to_string(),
        title: title.to_string(),
    }
}

pub fn welcome(business: &BusinessConfig, customer_name: &str) -> OutboundReply {
    OutboundReply::Buttons {
        body_text: format!(
            "Hi {}! 👋\nI'm *{}*, your virtual assistant 🤖\n\n\
             Welcome to *{}* 🍽️\n\
             Kindly click on one of the service options below 👇\n\n\
             💡 *Note:* To return to the main menu anytime, simply type *HI*",
            customer_name, business.assistant_name, business.name
        ),
        buttons: vec![
            option(ORDER_FOOD, "🛒 Order Food"),
            option(TRACK_ORDER, "📦 Track Order"),
            option(CONTACT_SUPPORT, "📞 Contact Support"),
        ],
    }
}

pub fn location_request() -> OutboundReply {
    OutboundReply::Text {
        body: "📍 Kindly send your *current location* by clicking the *attachment icon 📎* \
               in your message box and selecting *Location*."
            .to_string(),
    }
}

pub fn out_of_range(business: &BusinessConfig) -> OutboundReply {
    OutboundReply::Text {
        body: format!(
            "😞 Sorry, we currently do not serve your area.\n\n\
             You can still place your order through our website 🌐:\n👉 {}",
            business.website_url
        ),
    }
}

pub fn branch_list(region: &ServiceRegion) -> OutboundReply {
    OutboundReply::List {
        header_text: format!("🏢 Select a Restaurant in {}", region.name),
        body_text: format!(
            "We found you near *{}* 🗺️\n\nSelect from the restaurants below to place your order 🍽️",
            region.name
        ),
        footer_text: MENU_FOOTER.to_string(),
        button_label: VIEW_RESTAURANTS.to_string(),
        section_title: format!("{} Branches", region.name),
        rows: region.branches.iter().map(ReplyOption::from).collect(),
    }
}

pub fn add_items_prompt(restaurant: &str) -> OutboundReply {
    OutboundReply::Text {
        body: format!(
            "You selected *{}* ✅\n\nPlease add items from the menu below 👇.\n\
             Checkout only when all the items have been added to your cart 🛒.",
            restaurant
        ),
    }
}

pub fn category_list(category: &Category) -> OutboundReply {
    let header = category.display_header();
    OutboundReply::List {
        header_text: header.clone(),
        body_text: category.body_text.clone(),
        footer_text: CATEGORY_FOOTER.to_string(),
        button_label: VIEW_ITEMS.to_string(),
        section_title: header,
        rows: category.rows(),
    }
}
