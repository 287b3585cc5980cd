//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render one backend-fed region each. Panels receive the slot
//! they display; the owning page decides when it refreshes.

pub mod alerts_panel;
pub mod chat_widget;
pub mod data_source_badge;
pub mod form_field;
pub mod intelligence;
pub mod nav_bar;
pub mod next_actions_panel;
pub mod output_card;
pub mod sales_trends_panel;
pub mod score_bar;
pub mod slot_view;
