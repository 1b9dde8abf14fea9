use crate::poster::PosterData;

static BRAND_NAME: &str = "UniShack";
static BRAND_COLOR: &str = "#2774AE";

/// Render the poster into a single self-contained HTML page document, sized
/// for US Letter with all styles inlined so it can be handed straight to any
/// print pipeline.
// TODO: use some kind of templating?
pub fn make_poster_html(poster: &PosterData) -> String {
    let page = r###"<!doctype html>
<html>
    <head>
    <meta charset="utf-8">
    <title>Apartment Poster</title>
    <style>
@page {
    size: 8.5in 11in;
    margin: 0;
}
body {
    margin: 0;
    padding: 0;
    font-family: sans-serif;
    font-size: 16px;
}
@media print {
    body {
    -webkit-print-color-adjust: exact;
    print-color-adjust: exact;
    }
}
.poster {
    width: 8.5in;
    height: 11in;
    margin: 0 auto;
    padding: 32px;
    box-sizing: border-box;
    background-color: #ffffff;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: space-between;
}
.brand-band {
    width: 100%;
    box-sizing: border-box;
    background-color: {{brand_color}};
    color: #ffffff;
    padding: 16px;
    margin-bottom: 24px;
}
.brand-band h1 {
    margin: 0;
    font-size: 20px;
    font-weight: bold;
}
.headline {
    text-align: center;
    margin-bottom: 24px;
}
.headline .subtitle {
    margin: 0 0 12px 0;
    font-size: 36px;
    font-weight: bold;
    color: #111827;
}
.headline .description {
    margin: 0;
    font-size: 18px;
    color: #4b5563;
}
.content {
    flex: 1;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
}
.image-frame {
    position: relative;
    width: 384px;
    height: 256px;
    background-color: #f3f4f6;
    border: 2px solid #d1d5db;
    overflow: hidden;
    margin-bottom: 24px;
}
.image-frame img {
    width: 100%;
    height: 100%;
    object-fit: cover;
}
.image-placeholder {
    width: 100%;
    height: 100%;
    display: flex;
    align-items: center;
    justify-content: center;
    color: #9ca3af;
}
.listing-title {
    margin: 0 0 24px 0;
    font-size: 30px;
    font-weight: bold;
    color: #111827;
    text-align: center;
    max-width: 512px;
    line-height: 1.2;
}
.qr-frame {
    background-color: #ffffff;
    padding: 16px;
    border: 2px solid #d1d5db;
    margin-bottom: 24px;
}
.qr-frame img {
    display: block;
    width: 128px;
    height: 128px;
}
.visit {
    text-align: center;
}
.visit .lead {
    margin: 0 0 8px 0;
    font-size: 14px;
    font-weight: 500;
    color: #4b5563;
}
.visit .url {
    margin: 0;
    font-size: 18px;
    font-family: monospace;
    color: {{brand_color}};
    background-color: #f3f4f6;
    padding: 8px 12px;
    word-break: break-all;
    max-width: 448px;
}
.footer-band {
    width: 100%;
    box-sizing: border-box;
    background-color: {{brand_color}};
    color: #ffffff;
    text-align: center;
    padding: 24px;
    margin-top: 32px;
}
.footer-band .footer-title {
    display: block;
    font-size: 20px;
    font-weight: bold;
    margin-bottom: 8px;
}
.footer-band .footer-subtitle {
    display: block;
    font-size: 14px;
    opacity: 0.9;
}
</style></head>
<body>
<div class="poster">
    <div class="brand-band">
    <h1>{{brand_name}}</h1>
    </div>
    <div class="headline">
    <p class="subtitle">{{subtitle}}</p>
    <p class="description">{{description}}</p>
    </div>
    <div class="content">
    <div class="image-frame">{{image_block}}</div>
    <p class="listing-title">{{title}}</p>
    <div class="qr-frame">
        <img src="{{qr_code}}" alt="QR Code" onerror="this.style.display='none';">
    </div>
    <div class="visit">
        <p class="lead">Or visit directly:</p>
        <p class="url">{{url}}</p>
    </div>
    </div>
    <div class="footer-band">
    <span class="footer-title">{{footer_title}}</span>
    <span class="footer-subtitle">{{footer_subtitle}}</span>
    </div>
</div>
</body>
</html>"###;

    // A failed image load hides itself and reveals the placeholder glyph in
    // its place; the rest of the layout is untouched.
    let image_block = match poster.image {
        Some(_) => {
            r###"
        <img src="{{image}}" alt="{{title}}" onerror="this.style.display='none';this.nextElementSibling.style.display='flex';">
        <div class="image-placeholder" style="display: none;">{{placeholder_glyph}}</div>"###
        }
        None => {
            r###"
        <div class="image-placeholder">{{placeholder_glyph}}</div>"###
        }
    };

    let placeholder_glyph = r###"<svg width="48" height="48" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><rect x="3" y="3" width="18" height="18" rx="2"/><circle cx="9" cy="9" r="2"/><path d="m21 15-3.086-3.086a2 2 0 0 0-2.828 0L6 21"/></svg>"###;

    page.to_string()
        .replace("{{image_block}}", image_block)
        .replace("{{placeholder_glyph}}", placeholder_glyph)
        .replace("{{brand_name}}", BRAND_NAME)
        .replace("{{brand_color}}", BRAND_COLOR)
        .replace("{{subtitle}}", &escape_html(&poster.subtitle))
        .replace("{{description}}", &escape_html(&poster.description))
        .replace("{{image}}", &escape_html(poster.image.as_deref().unwrap_or_default()))
        .replace("{{title}}", &escape_html(&poster.title))
        .replace("{{qr_code}}", &escape_html(&poster.qr_code))
        .replace("{{url}}", &escape_html(&poster.url))
        .replace("{{footer_title}}", &escape_html(&poster.footer_title))
        .replace("{{footer_subtitle}}", &escape_html(&poster.footer_subtitle))
}

/// Poster text is arbitrary user input; the template is markup.
fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
