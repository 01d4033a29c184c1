// Reader views: document, summary, status line and command deck

pub mod view;
