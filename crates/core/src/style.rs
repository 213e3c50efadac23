use crate::models::exception::ExceptionKind;

/// Colors handed to the calendar view for one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventStyle {
    pub color: &'static str,
    pub border_color: &'static str,
    pub text_color: &'static str,
}

/// Presentation of an exception type in the calendar and the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExceptionStyle {
    pub label: &'static str,
    pub icon: &'static str,
    pub event: EventStyle,
}

/// Fixed treatment of shadow appointments, not configurable per provider.
pub const APPOINTMENT_STYLE: EventStyle = EventStyle {
    color: "#dbeafe",
    border_color: "#3b82f6",
    text_color: "#1e40af",
};

pub fn exception_style(kind: ExceptionKind) -> ExceptionStyle {
    match kind {
        ExceptionKind::DayOff => ExceptionStyle {
            label: "Day off",
            icon: "calendar-x",
            event: EventStyle {
                color: "#fee2e2",
                border_color: "#ef4444",
                text_color: "#991b1b",
            },
        },
        ExceptionKind::Modified => ExceptionStyle {
            label: "Modified hours",
            icon: "clock",
            event: EventStyle {
                color: "#fef3c7",
                border_color: "#f59e0b",
                text_color: "#92400e",
            },
        },
        ExceptionKind::Working => ExceptionStyle {
            label: "Extra working day",
            icon: "briefcase",
            event: EventStyle {
                color: "#dcfce7",
                border_color: "#22c55e",
                text_color: "#166534",
            },
        },
        ExceptionKind::Break => ExceptionStyle {
            label: "Break",
            icon: "coffee",
            event: EventStyle {
                color: "#e0e7ff",
                border_color: "#6366f1",
                text_color: "#3730a3",
            },
        },
    }
}
