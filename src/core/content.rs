//! The compiled-in guide: "Web Performance Optimization", seven sections.

use crate::core::catalog::{Catalog, CatalogError, ContentBlock, Icon, IconKind, Section, Tint};

pub const GUIDE_TITLE: &str = "Web Performance Optimization";

/// Build the built-in catalog.
pub fn guide() -> Result<Catalog, CatalogError> {
    Catalog::new(vec![
        introduction(),
        lazy_loading(),
        code_splitting(),
        image_optimization(),
        core_web_vitals(),
        web_fonts(),
        nextjs(),
    ])
}

fn introduction() -> Section {
    Section::new(
        "Introduction: The Importance of Web Performance Optimization",
        Icon::new(IconKind::Timer, Tint::Blue),
        vec![
            ContentBlock::text(
                "Website performance optimization is the process of making web pages load and run \
                 faster by improving the efficiency of the front-end code.",
            ),
            ContentBlock::text(
                "This process involves a variety of techniques and strategies aimed at reducing \
                 page load times, enhancing user experience, and improving overall site performance.",
            ),
            ContentBlock::text(
                "In today’s digital world, users expect websites to load quickly and be responsive. \
                 Performance isn't just a technical requirement—it's directly tied to user \
                 experience and SEO rankings. Slow websites often lead to higher bounce rates and \
                 lower engagement, which can significantly impact business success. Optimizing web \
                 performance is therefore essential for retaining users and providing a seamless \
                 browsing experience.",
            ),
            ContentBlock::text(
                "One of the critical factors that affect web performance is how quickly the First \
                 Contentful Paint (FCP) and Largest Contentful Paint (LCP) occur. These two metrics \
                 are part of Core Web Vitals, a set of performance measurements used by Google to \
                 evaluate the user experience on a website.",
            ),
            ContentBlock::titled_list(
                "Key Web Performance Metrics:",
                [
                    "First Contentful Paint (FCP):",
                    "FCP measures how long it takes for the first piece of content (text, image, or \
                     canvas) to appear on the screen after the user navigates to the page. A fast \
                     FCP gives the user immediate feedback that the page is loading.",
                    "Why It Matters: Users expect content to load quickly. If it takes too long to \
                     render anything on the screen, users may get frustrated and leave.",
                    "Largest Contentful Paint (LCP):",
                    "LCP measures the time it takes for the largest visible content element \
                     (usually an image or a large block of text) to fully render on the screen. \
                     LCP is a good indicator of how quickly the user can see the most meaningful \
                     content on a page.",
                    "Why It Matters: A slow LCP can leave users staring at an incomplete or blank \
                     page, which leads to poor user experience and higher abandonment rates.",
                ],
            ),
            ContentBlock::titled_list(
                "The Importance of Optimizing These Metrics:",
                [
                    "Improved User Experience: Fast page load times reduce frustration and make \
                     users more likely to stay on your website.",
                    "Better SEO: Google uses Core Web Vitals, including FCP and LCP, as ranking \
                     factors. Sites with better performance are ranked higher in search results.",
                    "Lower Bounce Rates: A website that loads quickly will retain users, preventing \
                     them from leaving before the page has fully loaded.",
                ],
            ),
        ],
    )
}

fn lazy_loading() -> Section {
    Section::new(
        "Lazy Loading Implementation",
        Icon::new(IconKind::Code, Tint::Green),
        vec![
            ContentBlock::text(
                "Lazy loading is a technique where certain elements (especially images or videos) \
                 load only when they appear in the user's view. This reduces initial load time and \
                 makes pages more responsive.",
            ),
            ContentBlock::code(
                "html",
                r#"<!-- Basic lazy loading example -->
<img src="image.jpg" loading="lazy" alt="Lazy loaded image">

<!-- Full example with container -->
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Lazy Loading Example</title>
    <style>
        .image-container {
            max-width: 600px;
            margin: 20px auto;
        }
        img {
            max-width: 100%;
            height: auto;
            display: block;
            margin: 10px 0;
        }
    </style>
</head>
<body>
    <div class="image-container">
        <img src="image1.jpg" loading="lazy" alt="Image 1">
        <img src="image2.jpg" loading="lazy" alt="Image 2">
        <img src="image3.jpg" loading="lazy" alt="Image 3">
    </div>
</body>
</html>"#,
            ),
            ContentBlock::list([
                "Improves initial load times",
                "Saves bandwidth by loading only visible content",
                "Native browser support with loading='lazy'",
                "Better user experience on slower connections",
            ]),
        ],
    )
}

fn code_splitting() -> Section {
    Section::new(
        "Code Splitting Techniques",
        Icon::new(IconKind::Code, Tint::Purple),
        vec![
            ContentBlock::text(
                "Code splitting is the practice of dividing your JavaScript files into smaller \
                 chunks, loading only the parts that are necessary for a specific page or component.",
            ),
            ContentBlock::code(
                "javascript",
                r#"// React code splitting example
import React, { Suspense, lazy } from 'react';

// Lazy load components
const Home = lazy(() => import('./components/Home'));
const About = lazy(() => import('./components/About'));

function App() {
  return (
    <div className="App">
      <Suspense fallback={<div>Loading...</div>}>
        <Routes>
          <Route path="/" element={<Home />} />
          <Route path="/about" element={<About />} />
        </Routes>
      </Suspense>
    </div>
  );
}"#,
            ),
            ContentBlock::list([
                "Reduces initial bundle size",
                "Improves application startup time",
                "Better caching capabilities",
                "More efficient resource utilization",
            ]),
        ],
    )
}

fn image_optimization() -> Section {
    Section::new(
        "Image Optimization",
        Icon::new(IconKind::Image, Tint::Red),
        vec![
            ContentBlock::text(
                "Optimizing images involves resizing, compressing, and properly formatting them to \
                 make sure they don't take up more space than necessary.",
            ),
            ContentBlock::code(
                "html",
                r#"<!-- Responsive images example -->
<img
  src="small.jpg"
  srcset="
    small.jpg 300w,
    medium.jpg 600w,
    large.jpg 900w
  "
  sizes="(max-width: 320px) 280px,
         (max-width: 640px) 580px,
         880px"
  alt="Responsive image"
>

<!-- CSS for responsive images -->
<style>
img {
    max-width: 100%;
    height: auto;
    display: block;
}
</style>"#,
            ),
            ContentBlock::list([
                "Use appropriate image formats (JPEG, PNG, WebP)",
                "Implement responsive images using srcset",
                "Compress images without quality loss",
                "Consider lazy loading for images",
                "Use modern image formats like WebP with fallbacks",
            ]),
        ],
    )
}

fn core_web_vitals() -> Section {
    Section::new(
        "Core Web Vitals & Performance Metrics",
        Icon::new(IconKind::Zap, Tint::Yellow),
        vec![
            ContentBlock::text(
                "Core Web Vitals are a set of specific factors that Google considers important in \
                 a webpage's overall user experience. Understanding and optimizing these metrics is \
                 crucial for both user experience and SEO performance.",
            ),
            ContentBlock::list([
                "Largest Contentful Paint (LCP): Should occur within 2.5 seconds for a good user \
                 experience",
                "First Input Delay (FID): Should be less than 100 milliseconds",
                "Cumulative Layout Shift (CLS): Should be less than 0.1",
                "Total Blocking Time (TBT): Should be under 200 milliseconds",
                "Time to Interactive (TTI): Should be under 5 seconds",
            ]),
            ContentBlock::text("Performance metrics are measured in two primary ways:"),
            ContentBlock::list([
                "Lab Testing: Simulated page loads in controlled environments, crucial for testing \
                 new features before release",
                "Field Testing (RUM): Real User Monitoring that measures actual user experiences \
                 in varying conditions",
            ]),
        ],
    )
}

fn web_fonts() -> Section {
    Section::new(
        "Web Font Optimization",
        Icon::new(IconKind::TextSelect, Tint::Pink),
        vec![
            ContentBlock::text(
                "Proper font optimization is essential for both performance and visual \
                 consistency. Here are best practices for handling web fonts:",
            ),
            ContentBlock::code(
                "css",
                r#"/* Optimized font loading strategy */
@font-face {
    font-family: 'CustomFont';
    src: url('/fonts/CustomFont.woff2') format('woff2'),
         url('/fonts/CustomFont.woff') format('woff');
    font-display: swap;
    font-weight: 400;
    font-style: normal;
}

/* Preload critical fonts */
<link
    rel="preload"
    href="/fonts/CustomFont.woff2"
    as="font"
    type="font/woff2"
    crossorigin
>"#,
            ),
            ContentBlock::list([
                "Use WOFF2 format for better compression",
                "Implement font-display: swap for better perceived performance",
                "Preload critical fonts",
                "Limit font weights and variants",
                "Consider using system fonts for better performance",
            ]),
        ],
    )
}

fn nextjs() -> Section {
    let topics: [(&str, [&str; 6]); 10] = [
        (
            "1. Server Components",
            [
                "Zero bundle size impact - components are executed on the server and don't add \
                 to the JavaScript sent to clients",
                "Instant loading states while data fetching",
                "Automatic code splitting without configuration",
                "Direct database access without API layers",
                "Better security by keeping sensitive data and logic on the server",
                "Improved SEO with server-side rendering",
            ],
        ),
        (
            "2. Automatic Image Optimization",
            [
                "Automatic image resizing for different devices",
                "Lazy loading by default for improved initial page load",
                "Automatic conversion to modern formats like WebP and AVIF",
                "Prevents Cumulative Layout Shift (CLS) with proper image dimensions",
                "Built-in blur-up placeholder effect for better user experience",
                "Optimized delivery through Next.js's built-in Image Optimization API",
            ],
        ),
        (
            "3. Intelligent Routing and Navigation",
            [
                "Automatic route prefetching for faster subsequent page loads",
                "Route groups for better code organization and loading",
                "Parallel routes for simultaneous loading of multiple sections",
                "Intercepting routes for modal-like experiences",
                "Optional catch-all routes for dynamic handling",
                "Automatic 404 handling without extra configuration",
            ],
        ),
        (
            "4. Advanced Data Fetching",
            [
                "Incremental Static Regeneration (ISR) for dynamic content with static benefits",
                "Automatic static optimization where possible",
                "Request memoization to prevent duplicate data fetching",
                "Streaming for progressive page loading",
                "Parallel data fetching for improved performance",
                "Built-in cache handling for optimal data freshness",
            ],
        ),
        (
            "5. Script Optimization",
            [
                "Automatic code splitting for optimal loading",
                "Smart script loading strategies (beforeInteractive, afterInteractive, lazyOnload)",
                "Automatic defer loading of non-critical scripts",
                "Built-in support for module/nomodule pattern",
                "Optimized third-party script loading",
                "Automatic inline script optimization",
            ],
        ),
        (
            "6. Build Optimization",
            [
                "Automatic bundling and minification",
                "Tree shaking for removing unused code",
                "Efficient chunk splitting for better caching",
                "Optimized production builds with reduced size",
                "Automatic polyfill handling",
                "Smart page revalidation strategies",
            ],
        ),
        (
            "7. Edge Runtime Capabilities",
            [
                "Global edge network deployment for faster response times",
                "Reduced server load with edge computing",
                "Automatic region selection for optimal performance",
                "Minimal cold starts with edge functions",
                "Lower latency for dynamic operations",
                "Improved scalability with distributed computing",
            ],
        ),
        (
            "8. CSS and Font Optimization",
            [
                "Automatic CSS inlining for critical styles",
                "Route-based CSS loading for reduced initial bundle",
                "Built-in CSS modules support",
                "Optimized font loading with next/font",
                "Zero layout shift font loading",
                "Automatic subset generation for fonts",
            ],
        ),
        (
            "9. Middleware Optimization",
            [
                "Request-level performance optimization",
                "Dynamic routing based on user context",
                "Efficient A/B testing implementation",
                "Streamlined authentication checks",
                "Geographic-based content optimization",
                "Request/response manipulation without server overhead",
            ],
        ),
        (
            "10. Development Optimization",
            [
                "Fast Refresh for instant feedback during development",
                "Built-in TypeScript support for better code quality",
                "Automatic error reporting and handling",
                "Development-specific performance optimizations",
                "Integrated debugging tools",
                "Built-in performance monitoring",
            ],
        ),
    ];

    let mut content = vec![ContentBlock::text(
        "Next.js offers powerful built-in features and optimization techniques that can \
         significantly improve your web application's performance. Here's a comprehensive \
         overview of these techniques and their benefits:",
    )];
    for (heading, items) in topics {
        content.push(ContentBlock::text(heading));
        content.push(ContentBlock::list(items));
    }

    Section::new(
        "Next.js Performance Optimization Techniques",
        Icon::new(IconKind::Rocket, Tint::Indigo),
        content,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guide_has_seven_sections() {
        let catalog = guide().unwrap();
        assert_eq!(catalog.len().get(), 7);
        assert_eq!(catalog.sections()[1].title, "Lazy Loading Implementation");
        assert_eq!(
            catalog.sections()[6].title,
            "Next.js Performance Optimization Techniques"
        );
    }

    #[test]
    fn test_every_section_has_content() {
        let catalog = guide().unwrap();
        assert!(catalog.iter().all(|s| !s.content.is_empty()));
    }

    #[test]
    fn test_code_samples_keep_their_language() {
        let catalog = guide().unwrap();
        let languages: Vec<&str> = catalog
            .iter()
            .flat_map(|s| &s.content)
            .filter_map(|b| match b {
                ContentBlock::Code { language, .. } => Some(language.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(languages, ["html", "javascript", "html", "css"]);
    }

    #[test]
    fn test_nextjs_section_alternates_heading_and_list() {
        let catalog = guide().unwrap();
        let blocks = &catalog.sections()[6].content;
        assert_eq!(blocks.len(), 21);
        assert!(matches!(&blocks[1], ContentBlock::Text { text } if text == "1. Server Components"));
        assert!(matches!(&blocks[20], ContentBlock::List { items, .. } if items.len() == 6));
    }
}
