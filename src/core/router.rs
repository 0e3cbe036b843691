use crate::config::toml_config::{BotConfig, BusinessConfig};
use crate::core::geofence;
use crate::core::replies::{self, ORDER_FOOD};
use crate::domain::model::{Catalog, InboundEvent, OutboundReply, ServiceRegion};

pub const RESTAURANT_PREFIX: &str = "rest_";

/// Maps one inbound event to the replies it deserves.
///
/// Holds only read-only configuration, so a single instance can be shared
/// across concurrent requests. Nothing is remembered between calls: the
/// chosen restaurant, for instance, is read back out of the list row id.
#[derive(Debug, Clone)]
pub struct ConversationRouter {
    regions: Vec<ServiceRegion>,
    catalog: Catalog,
    business: BusinessConfig,
}

impl ConversationRouter {
    pub fn new(regions: Vec<ServiceRegion>, catalog: Catalog, business: BusinessConfig) -> Self {
        Self {
            regions,
            catalog,
            business,
        }
    }

    pub fn from_config(config: &BotConfig) -> Self {
        Self::new(
            config.regions.clone(),
            config.catalog.clone(),
            config.business.clone(),
        )
    }

    pub fn regions(&self) -> &[ServiceRegion] {
        &self.regions
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn route(&self, event: &InboundEvent, customer_name: &str) -> Vec<OutboundReply> {
        match event {
            InboundEvent::Greeting => vec![replies::welcome(&self.business, customer_name)],

            InboundEvent::ButtonSelected(id) if id == ORDER_FOOD => {
                vec![replies::location_request()]
            }

            InboundEvent::LocationShared {
                latitude,
                longitude,
            } => match geofence::resolve(*latitude, *longitude, &self.regions) {
                Some(region) => {
                    tracing::debug!(region = %region.name, "location inside service area");
                    vec![replies::branch_list(region)]
                }
                None => {
                    tracing::debug!(latitude, longitude, "location outside every service area");
                    vec![replies::out_of_range(&self.business)]
                }
            },

            InboundEvent::ListItemSelected(id) if id.starts_with(RESTAURANT_PREFIX) => {
                let restaurant = &id[RESTAURANT_PREFIX.len()..];
                let mut out = Vec::with_capacity(1 + self.catalog.categories.len());
                out.push(replies::add_items_prompt(restaurant));
                out.extend(self.catalog.categories.iter().map(replies::category_list));
                out
            }

            InboundEvent::ListItemSelected(id) => {
                // Item picks are recognised but ordering is not part of this flow yet.
                if let Some((category, item)) = self.catalog.find_item(id) {
                    tracing::debug!(category = %category.header, item, "menu item selected, no reply");
                } else {
                    tracing::debug!(id = %id, "unknown list selection ignored");
                }
                Vec::new()
            }

            InboundEvent::ButtonSelected(id) => {
                tracing::debug!(id = %id, "button has no handler, ignored");
                Vec::new()
            }

            InboundEvent::Unrecognized => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::{default_catalog, default_regions};
    use crate::config::toml_config::BusinessConfig;

    fn router() -> ConversationRouter {
        ConversationRouter::new(default_regions(), default_catalog(), BusinessConfig::default())
    }

    #[test]
    fn test_greeting_personalized() {
        let replies = router().route(&InboundEvent::Greeting, "Ada");
        assert_eq!(replies.len(), 1);
        match &replies[0] {
            OutboundReply::Buttons { body_text, buttons } => {
                assert!(body_text.contains("Ada"));
                let ids: Vec<&str> = buttons.iter().map(|b| b.id.as_str()).collect();
                assert_eq!(ids, ["order_food", "track_order", "contact_support"]);
            }
            other => panic!("expected buttons, got {:?}", other),
        }
    }

    #[test]
    fn test_order_food_requests_location() {
        let replies = router().route(&InboundEvent::ButtonSelected("order_food".into()), "Ada");
        assert_eq!(replies.len(), 1);
        match &replies[0] {
            OutboundReply::Text { body } => assert!(body.contains("current location")),
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_unhandled_buttons_and_items_are_silent() {
        let r = router();
        for event in [
            InboundEvent::ButtonSelected("track_order".into()),
            InboundEvent::ButtonSelected("contact_support".into()),
            InboundEvent::ListItemSelected("meals_fried_rice".into()),
            InboundEvent::ListItemSelected("something_else".into()),
            InboundEvent::Unrecognized,
        ] {
            assert!(r.route(&event, "Ada").is_empty(), "{:?} produced replies", event);
        }
    }

    #[test]
    fn test_restaurant_segment_keeps_text_after_prefix() {
        let replies = router().route(&InboundEvent::ListItemSelected("rest_okpa_square".into()), "Ada");
        match &replies[0] {
            OutboundReply::Text { body } => assert!(body.contains("okpa_square")),
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_location_in_second_region() {
        // Wuse, Abuja
        let replies = router().route(
            &InboundEvent::LocationShared {
                latitude: 9.07,
                longitude: 7.48,
            },
            "Ada",
        );
        match &replies[0] {
            OutboundReply::List {
                header_text, rows, ..
            } => {
                assert!(header_text.contains("Abuja"));
                assert_eq!(rows.len(), 2);
                assert_eq!(rows[0].id, "rest_wuse");
            }
            other => panic!("expected list, got {:?}", other),
        }
    }
}
