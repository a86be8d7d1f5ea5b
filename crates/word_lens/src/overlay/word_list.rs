//! Word list label assembly

use crate::core::config::WordListConfig;
use crate::foundation::math::{Rect, Vec2};
use crate::host::Screen;
use crate::layout::{GreedyLineWrapper, WordListLayout};
use crate::overlay::data::WordListLabel;
use crate::overlay::loupe::text_box_region;
use crate::overlay::style::WordStyle;
use crate::tracking::WordStore;
use crate::translate::TranslationTable;

/// Build the label showing the translations of all tracked words
///
/// The translations are joined in tracking order and wrapped to half the
/// screen width in columns. The label is scaled about the top center of the
/// text box so that the list fits into it.
pub fn word_list_label(
    screen: &Screen,
    loupe: &Rect,
    config: &WordListConfig,
    style: &WordStyle,
    store: &WordStore,
    table: &TranslationTable,
) -> WordListLabel {
    let text_box = text_box_region(screen, loupe, config);
    let placement =
        WordListLayout::new(config).compute_layout(store.len(), &text_box, style.native_line_height);

    let mut rect = placement.first_line;
    rect.y += rect.height * config.word_padding;
    rect.x = (screen.width / 4) as f32;

    let words = table.translate_all(store.iter().map(|w| w.word.string_value.as_str()));
    let text = GreedyLineWrapper::wrap(&words, (screen.width / 2) as usize);

    WordListLabel {
        rect,
        text,
        scale: placement.scale,
        pivot: Vec2::new(screen.w() * 0.5, text_box.y),
        style: style.clone(),
    }
}
