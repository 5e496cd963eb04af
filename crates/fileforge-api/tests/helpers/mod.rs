//! Shared test harness: an in-process app over temp scratch directories,
//! plus fixture builders for images and PDFs.

#![allow(dead_code)] // Not every test binary uses every helper.

use std::path::{Path, PathBuf};

use axum_test::TestServer;
use fileforge_core::Config;
use tempfile::TempDir;

pub struct TestApp {
    pub server: TestServer,
    temp_dir: TempDir,
}

impl TestApp {
    /// Get the HTTP test client.
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    pub fn upload_dir(&self) -> PathBuf {
        self.temp_dir.path().join("uploads")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.temp_dir.path().join("outputs")
    }

    /// True when no scratch file from any request remains on disk.
    pub fn scratch_is_empty(&self) -> bool {
        dir_is_empty(&self.upload_dir()) && dir_is_empty(&self.output_dir())
    }
}

fn dir_is_empty(path: &Path) -> bool {
    std::fs::read_dir(path)
        .map(|mut entries| entries.next().is_none())
        .unwrap_or(true)
}

/// Setup a test application with isolated scratch directories.
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with_limit(10 * 1024 * 1024).await
}

pub async fn setup_test_app_with_limit(max_upload_bytes: usize) -> TestApp {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let config = Config {
        server_port: 0,
        upload_dir: temp_dir.path().join("uploads"),
        output_dir: temp_dir.path().join("outputs"),
        max_upload_bytes,
        conversion_timeout_secs: 30,
        max_concurrent_conversions: 2,
        http_concurrency_limit: 16,
        cors_origins: vec!["*".to_string()],
        environment: "test".to_string(),
    };

    let (_state, router) = fileforge_api::setup::initialize_app(config)
        .await
        .expect("Failed to initialize app");

    TestApp {
        server: TestServer::new(router).expect("Failed to build test server"),
        temp_dir,
    }
}

pub mod fixtures {
    use std::io::Cursor;

    /// A solid-color PNG of the given dimensions.
    pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbImage::from_pixel(width, height, image::Rgb([20, 120, 220]));
        let mut buffer = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut buffer, image::ImageFormat::Png)
            .unwrap();
        buffer.into_inner()
    }

    /// A solid-color JPEG of the given dimensions.
    pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbImage::from_pixel(width, height, image::Rgb([200, 40, 40]));
        let mut buffer = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut buffer, image::ImageFormat::Jpeg)
            .unwrap();
        buffer.into_inner()
    }

    /// A minimal single-page PDF with one text line per entry in `lines`,
    /// written with correct xref offsets. Lines must not contain parentheses
    /// or backslashes.
    pub fn simple_text_pdf(lines: &[&str]) -> Vec<u8> {
        let mut stream = String::from("BT\n/F1 12 Tf\n14 TL\n72 720 Td\n");
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                stream.push_str("T*\n");
            }
            stream.push_str(&format!("({line}) Tj\n"));
        }
        stream.push_str("ET");

        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 5 0 R >> >> /Contents 4 0 R >>"
                .to_string(),
            format!(
                "<< /Length {} >>\nstream\n{}\nendstream",
                stream.len(),
                stream
            ),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        ];

        let mut pdf = String::from("%PDF-1.4\n");
        let mut offsets = Vec::new();
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.push_str(&format!("{} 0 obj\n{}\nendobj\n", i + 1, body));
        }

        let xref_offset = pdf.len();
        pdf.push_str(&format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1));
        for offset in offsets {
            pdf.push_str(&format!("{offset:010} 00000 n \n"));
        }
        pdf.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset
        ));

        pdf.into_bytes()
    }
}
