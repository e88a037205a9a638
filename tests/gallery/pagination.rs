//! Activation and load-more behaviour.

use wallhaven_gallery::gallery::{FetchCall, GalleryController, Listing};

use crate::support::{catalog, ids, pages};

#[tokio::test]
async fn activation_loads_first_unfiltered_page() {
    let catalog = catalog();
    let controller = GalleryController::new(catalog.clone());

    assert!(controller.activate().await);

    assert_eq!(catalog.calls(), vec![FetchCall::new(1, "")]);
    let session = controller.snapshot();
    assert_eq!(ids(&session.records), ids(&pages("all", 5, 3)[0]));
    assert_eq!(session.current_page, 1);
    assert_eq!(session.total_pages, 5);
    assert!(!session.loading);
    assert!(session.error.is_none());
    assert!(controller.has_more());
}

#[tokio::test]
async fn activation_happens_once() {
    let catalog = catalog();
    let controller = GalleryController::new(catalog.clone());

    assert!(controller.activate().await);
    assert!(!controller.activate().await);
    assert_eq!(catalog.call_count(), 1);
}

#[tokio::test]
async fn load_more_walks_to_the_last_page() {
    let catalog = catalog();
    let controller = GalleryController::new(catalog.clone());
    controller.activate().await;
    assert!(controller.has_more());

    for _ in 0..4 {
        assert!(controller.load_more().await);
    }

    let session = controller.snapshot();
    assert_eq!(session.current_page, 5);
    assert!(!controller.has_more());
    assert_eq!(session.records.len(), 15);

    // ascending page order, nothing repeated
    let expected: Vec<String> = pages("all", 5, 3).iter().flat_map(|p| ids(p)).collect();
    assert_eq!(ids(&session.records), expected);

    let requested: Vec<u32> = catalog.calls().iter().map(|c| c.page).collect();
    assert_eq!(requested, vec![1, 2, 3, 4, 5]);
    assert_eq!(controller.listing(), Listing::EndOfGallery);
}

#[tokio::test]
async fn load_more_on_last_page_is_a_no_op() {
    let catalog = catalog();
    let controller = GalleryController::new(catalog.clone());
    controller.search("sky").await;
    assert!(controller.load_more().await);

    let before = controller.snapshot();
    let calls_before = catalog.call_count();

    assert!(!controller.load_more().await);

    assert_eq!(catalog.call_count(), calls_before);
    assert_eq!(controller.snapshot(), before);
}

#[tokio::test]
async fn load_more_before_anything_loaded_does_nothing() {
    let catalog = catalog();
    let controller = GalleryController::new(catalog.clone());

    assert!(!controller.load_more().await);
    assert_eq!(catalog.call_count(), 0);
}

#[tokio::test]
async fn overlapping_load_more_issues_one_request() {
    let catalog = catalog();
    let controller = GalleryController::new(catalog.clone());
    controller.activate().await;

    catalog.hold();
    let release = async {
        while catalog.parked() == 0 {
            tokio::task::yield_now().await;
        }
        catalog.resume();
    };
    let (first, second, ()) = tokio::join!(controller.load_more(), controller.load_more(), release);

    assert!(first);
    assert!(!second);
    assert_eq!(catalog.calls(), vec![FetchCall::new(1, ""), FetchCall::new(2, "")]);
    assert_eq!(controller.snapshot().current_page, 2);
}

#[tokio::test]
async fn load_more_is_refused_while_a_search_is_in_flight() {
    let catalog = catalog();
    let controller = GalleryController::new(catalog.clone());
    controller.activate().await;

    catalog.hold();
    let probe = async {
        while catalog.parked() == 0 {
            tokio::task::yield_now().await;
        }
        assert!(controller.is_loading());
        assert_eq!(controller.listing(), Listing::Loading);
        let refused = !controller.load_more().await;
        catalog.resume();
        refused
    };
    let ((), refused) = tokio::join!(controller.search("sky"), probe);

    assert!(refused);
    assert_eq!(catalog.call_count(), 2);
}

#[tokio::test]
async fn listing_offers_more_until_the_end() {
    let catalog = catalog();
    let controller = GalleryController::new(catalog);
    assert_eq!(controller.listing(), Listing::Idle);

    controller.search("sky").await;
    assert_eq!(controller.listing(), Listing::CanLoadMore);

    controller.load_more().await;
    assert_eq!(controller.listing(), Listing::EndOfGallery);
}
