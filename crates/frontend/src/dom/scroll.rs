use catalog_contracts::behaviors::b103_smooth_scroll::ScrollHost;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

pub struct DocumentScrollHost {
    document: Document,
}

impl DocumentScrollHost {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl ScrollHost for DocumentScrollHost {
    type Target = Element;

    fn find_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn scroll_to(&self, target: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
