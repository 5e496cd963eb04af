mod helpers;

use axum_test::multipart::{MultipartForm, Part};
use helpers::{fixtures, setup_test_app};

#[tokio::test]
async fn images_compose_into_one_page_per_image() {
    let app = setup_test_app().await;

    let form = MultipartForm::new()
        .add_part(
            "images",
            Part::bytes(fixtures::png_bytes(60, 40))
                .file_name("first.png")
                .mime_type("image/png"),
        )
        .add_part(
            "images",
            Part::bytes(fixtures::jpeg_bytes(30, 30))
                .file_name("second.jpg")
                .mime_type("image/jpeg"),
        );

    let response = app.client().post("/upload_images").multipart(form).await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(
        response.header("content-type").to_str().unwrap(),
        "application/pdf"
    );
    assert!(response
        .header("content-disposition")
        .to_str()
        .unwrap()
        .contains("converted_images.pdf"));

    let pdf = response.as_bytes().to_vec();
    let document = lopdf::Document::load_mem(&pdf).unwrap();
    assert_eq!(document.get_pages().len(), 2);

    assert!(app.scratch_is_empty());
}

#[tokio::test]
async fn single_image_yields_single_page_pdf() {
    let app = setup_test_app().await;

    let form = MultipartForm::new().add_part(
        "images",
        Part::bytes(fixtures::png_bytes(16, 16))
            .file_name("only.png")
            .mime_type("image/png"),
    );

    let response = app.client().post("/upload_images").multipart(form).await;

    assert_eq!(response.status_code(), 200);
    let document = lopdf::Document::load_mem(&response.as_bytes().to_vec()).unwrap();
    assert_eq!(document.get_pages().len(), 1);
}

#[tokio::test]
async fn missing_images_field_is_a_client_error() {
    let app = setup_test_app().await;

    let form = MultipartForm::new().add_text("unrelated", "value");
    let response = app.client().post("/upload_images").multipart(form).await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.text(), "No file part");
    assert!(app.scratch_is_empty());
}

#[tokio::test]
async fn empty_file_selection_is_a_client_error() {
    let app = setup_test_app().await;

    // A browser with no file picked submits one empty part.
    let form = MultipartForm::new().add_part("images", Part::bytes(Vec::<u8>::new()).file_name(""));
    let response = app.client().post("/upload_images").multipart(form).await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.text(), "No selected files");
}

#[tokio::test]
async fn undecodable_image_is_a_server_error() {
    let app = setup_test_app().await;

    let form = MultipartForm::new()
        .add_part(
            "images",
            Part::bytes(fixtures::png_bytes(8, 8))
                .file_name("ok.png")
                .mime_type("image/png"),
        )
        .add_part(
            "images",
            Part::bytes(b"not an image".to_vec())
                .file_name("broken.png")
                .mime_type("image/png"),
        );

    let response = app.client().post("/upload_images").multipart(form).await;

    assert_eq!(response.status_code(), 500);
    assert!(response.text().starts_with("Error processing images:"));
    assert!(app.scratch_is_empty());
}
