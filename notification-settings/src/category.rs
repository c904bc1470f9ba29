//! Static table of the notification categories known to the host application.

/// A kind of account event which can produce a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationCategory {
    /// Id stored in `enabledTypes`.
    pub id: &'static str,
    /// Short display name.
    pub label: &'static str,
    /// One-line description shown under the label.
    pub description: &'static str,
}

/// All known categories, in display order.
pub static CATEGORIES: [NotificationCategory; 6] = [
    NotificationCategory {
        id: "transfer",
        label: "积分转移",
        description: "账户之间的积分互转",
    },
    NotificationCategory {
        id: "community",
        label: "社区划转",
        description: "来自社区操作的积分变动",
    },
    NotificationCategory {
        id: "red_envelope_receive",
        label: "红包收入",
        description: "领取他人发放的红包",
    },
    NotificationCategory {
        id: "distribute",
        label: "系统分发",
        description: "系统自动分发的积分奖励",
    },
    NotificationCategory {
        id: "receive",
        label: "他人转入",
        description: "收到他人的直接转账",
    },
    NotificationCategory {
        id: "payment",
        label: "消费支出",
        description: "购买商品或服务的支出",
    },
];

/// Categories enabled for a user who has never changed their settings.
///
/// Note the order differs from [`CATEGORIES`]; records written by older clients use this order.
pub const DEFAULT_ENABLED_TYPES: [&str; 6] = [
    "transfer",
    "community",
    "red_envelope_receive",
    "distribute",
    "payment",
    "receive",
];
