fn main() {
    // Errors are already logged; the page keeps working without the behaviors.
    if let Err(e) = page_behavior::init_page_behavior() {
        log::error!("initPageBehavior failed: {:?}", e);
    }
}
