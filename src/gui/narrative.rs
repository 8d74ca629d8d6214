//! Summary tab: fixed project description.

use egui::{RichText, ScrollArea};

struct Section {
    title: &'static str,
    items: &'static [&'static str],
}

const SECTIONS: [Section; 4] = [
    Section {
        title: "📌 Goal",
        items: &[
            "Collect store reviews of a mobile application and present them as an interactive dashboard.",
        ],
    },
    Section {
        title: "🔧 Steps",
        items: &[
            "Reviews are read from a static CSV export (userName, score, at, content).",
            "Light preprocessing: case folding and stopword removal (language list plus \"yg\", \"dg\", \"rt\").",
            "Sentiment is labeled from the score: 1-2 Negatif, 3 Netral, 4-5 Positif.",
            "Results: sentiment distribution, word cloud, the 20 most common words and a review table.",
        ],
    },
    Section {
        title: "🎯 Reading the Dashboard",
        items: &[
            "The distribution chart shows the overall tone of user feedback.",
            "Frequent words point to the topics users talk about most, such as delivery, price and product quality.",
            "The dashboard can be used to monitor user opinion periodically.",
        ],
    },
    Section {
        title: "🧠 Possible Extensions",
        items: &[
            "Classify sentiment with a trained model instead of the score threshold.",
            "Filter by date or search reviews by keyword.",
            "Keep a history of collected reviews for long-term trend analysis.",
        ],
    },
];

pub fn show(ui: &mut egui::Ui) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.heading("📝 Summary");
            ui.add_space(10.0);

            for section in &SECTIONS {
                ui.label(RichText::new(section.title).size(16.0).strong());
                ui.add_space(4.0);
                for item in section.items {
                    ui.horizontal_wrapped(|ui| {
                        ui.label("•");
                        ui.label(*item);
                    });
                }
                ui.add_space(12.0);
            }
        });
}
