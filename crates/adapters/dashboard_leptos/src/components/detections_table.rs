use camwatch_app::view_model::TableRow;
use leptos::prelude::*;

use crate::views::CameraSignals;

/// Recent detections for the selected camera.
#[component]
pub fn DetectionsTable(signals: CameraSignals) -> impl IntoView {
    let detections = signals.detections;

    view! {
        <table class="detections-table">
            <thead>
                <tr>
                    <th>"Date"</th>
                    <th>"Time"</th>
                    <th>"Object"</th>
                    <th>"Confidence"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    detections
                        .with(|state| state.table_rows())
                        .into_iter()
                        .map(|row| match row {
                            TableRow::Detection(row) => view! {
                                <tr>
                                    <td>{row.date}</td>
                                    <td>{row.time}</td>
                                    <td>{row.class_name}</td>
                                    <td>{row.confidence}</td>
                                </tr>
                            }
                            .into_any(),
                            TableRow::Message { text, is_error } => view! {
                                <tr>
                                    <td colspan="4" class="table-message" class:error=is_error>
                                        {text}
                                    </td>
                                </tr>
                            }
                            .into_any(),
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}
