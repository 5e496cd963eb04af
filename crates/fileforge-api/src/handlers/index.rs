//! The upload form page: four forms, one per conversion route, served
//! identically on every GET with no server-side state.

use axum::response::Html;

pub async fn index() -> Html<&'static str> {
    Html(FORM_PAGE)
}

const FORM_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>File Converter</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            margin: 0;
            padding: 0;
            background-color: #f4f4f9;
            color: #333;
        }
        header {
            background-color: #4CAF50;
            color: white;
            padding: 1rem 0;
            text-align: center;
        }
        main {
            padding: 2rem;
            max-width: 800px;
            margin: auto;
            background: white;
            box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
            border-radius: 8px;
        }
        h1, h2 {
            color: #333;
        }
        form {
            margin-bottom: 2rem;
            padding: 1rem;
            border: 1px solid #ccc;
            border-radius: 8px;
            background: #f9f9f9;
        }
        label {
            display: block;
            margin-bottom: 0.5rem;
            font-weight: bold;
        }
        input[type="file"], button {
            margin-top: 0.5rem;
            padding: 0.5rem;
            font-size: 1rem;
            border: 1px solid #ccc;
            border-radius: 4px;
            width: 100%;
        }
        button {
            background-color: #4CAF50;
            color: white;
            border: none;
            cursor: pointer;
        }
        button:hover {
            background-color: #45a049;
        }
        footer {
            margin-top: 2rem;
            text-align: center;
            padding: 1rem;
            background-color: #4CAF50;
            color: white;
        }
    </style>
</head>
<body>
    <header>
        <h1>File Converter</h1>
    </header>
    <main>

        <h2>HEIC to PNG Converter</h2>
        <form action="/upload_heic" method="post" enctype="multipart/form-data">
            <label for="heic">Choose a HEIC file (max 10 MB):</label>
            <input type="file" id="heic" name="heic" accept="image/heic" required>
            <button type="submit">Convert</button>
        </form>

        <h2>PDF to Image Converter</h2>
        <form action="/upload_pdf" method="post" enctype="multipart/form-data">
            <label for="pdf">Choose a PDF file (max 10 MB):</label>
            <input type="file" id="pdf" name="pdf" accept="application/pdf" required>
            <label for="format">Select image format:</label>
            <input type="radio" id="jpg" name="format" value="JPG" checked> JPG
            <input type="radio" id="png" name="format" value="PNG"> PNG
            <button type="submit">Convert</button>
        </form>

        <h2>Image to PDF Converter</h2>
        <form action="/upload_images" method="post" enctype="multipart/form-data">
            <label for="images">Choose image files (max 10 MB each):</label>
            <input type="file" id="images" name="images" accept="image/*" multiple required>
            <button type="submit">Convert</button>
        </form>

        <h2>PDF to DOCX Converter</h2>
        <form action="/upload_pdf_to_docx" method="post" enctype="multipart/form-data">
            <label for="pdf_to_docx">Choose a PDF file (max 10 MB):</label>
            <input type="file" id="pdf_to_docx" name="pdf_to_docx" accept="application/pdf" required>
            <button type="submit">Convert</button>
        </form>
    </main>
    <footer>
        <p>Powered by fileforge</p>
    </footer>
</body>
</html>
"#;
