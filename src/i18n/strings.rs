//! The complete display-string schema for the page, with one constant table
//! per supported language.
//!
//! Every field is `&'static str` (or a fixed-size array of them), so a table
//! that misses a field simply does not compile: schema parity across
//! languages is a compile-time guarantee, not a runtime check.

/// A feature card: short title over a longer blurb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub detail: &'static str,
}

/// One app screen entry shown by the accordion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nav {
    pub customer: &'static str,
    pub vendor: &'static str,
    pub driver: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomerCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub benefits: [&'static str; 4],
    pub become_vendor: &'static str,
    pub become_driver: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VendorStats {
    pub active_vendors: &'static str,
    pub monthly_orders: &'static str,
    pub avg_prep_time: &'static str,
    /// The prep-time figure itself is localized ("15min" vs "15 دقيقة").
    pub avg_prep_value: &'static str,
    pub todays_orders: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VendorDashboard {
    pub heading: &'static str,
    pub revenue: &'static str,
    pub rating: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VendorCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub features: [Feature; 3],
    pub stats: VendorStats,
    pub dashboard: VendorDashboard,
    pub preview_caption: &'static str,
    pub preview_tagline: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverStats {
    pub active_drivers: &'static str,
    pub service_areas: &'static str,
    pub driver_rating: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverMetrics {
    pub potential_earnings: &'static str,
    pub per_hour: &'static str,
    pub peak_hours: &'static str,
    pub weekend_bonus: &'static str,
    pub top_drivers_note: &'static str,
    pub todays_earnings: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverDashboard {
    pub heading: &'static str,
    pub online: &'static str,
    pub current_route: &'static str,
    pub gps_badge: &'static str,
    pub trips: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub features: [Feature; 3],
    pub stats: DriverStats,
    pub metrics: DriverMetrics,
    pub dashboard: DriverDashboard,
    pub preview_caption: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterCopy {
    pub description: &'static str,
    pub contact: &'static str,
    pub hours: &'static str,
    pub legal: &'static str,
    pub privacy: &'static str,
    pub terms: &'static str,
    pub download_customer: &'static str,
    pub made_with: &'static str,
    pub rights: &'static str,
}

/// Alt/aria text for the store badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Buttons {
    pub download_ios: &'static str,
    pub download_android: &'static str,
}

/// Every display string the page renders, for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translations {
    pub nav: Nav,
    pub customer: CustomerCopy,
    pub vendor: VendorCopy,
    pub driver: DriverCopy,
    pub screens: [Screen; 3],
    pub availability: &'static str,
    pub footer: FooterCopy,
    pub buttons: Buttons,
}

// ==================== English ====================

pub const EN: Translations = Translations {
    nav: Nav {
        customer: "Customer App",
        vendor: "Become a Vendor",
        driver: "Become a Driver",
    },

    customer: CustomerCopy {
        title: "Fast grocery & food delivery",
        subtitle: "Takkeh brings what you need in minutes — simple, fast, and reliable.",
        benefits: [
            "Easy ordering from your favorite stores",
            "Live order tracking with real-time updates",
            "Secure payments with multiple options",
            "24/7 helpful customer support",
        ],
        become_vendor: "Become a Vendor",
        become_driver: "Become a Driver",
    },

    vendor: VendorCopy {
        title: "Become a Vendor",
        subtitle: "Sell groceries or meals on Takkeh. Reach more customers with a simple app.",
        features: [
            Feature {
                title: "Real-time orders and notifications",
                detail: "Get instant notifications for new orders and manage them efficiently in real-time.",
            },
            Feature {
                title: "Easy menu & inventory management",
                detail: "Update your menu, track inventory, and manage your store with powerful tools.",
            },
            Feature {
                title: "Fast payouts and transparent pricing",
                detail: "Receive payments quickly with transparent fees and detailed analytics.",
            },
        ],
        stats: VendorStats {
            active_vendors: "Active Vendors",
            monthly_orders: "Monthly Orders",
            avg_prep_time: "Avg. Prep Time",
            avg_prep_value: "15min",
            todays_orders: "Today's Orders",
        },
        dashboard: VendorDashboard {
            heading: "Vendor Dashboard",
            revenue: "Revenue",
            rating: "Rating",
        },
        preview_caption: "Vendor App Preview",
        preview_tagline: "Real-time dashboard & analytics",
    },

    driver: DriverCopy {
        title: "Become a Driver",
        subtitle: "Deliver with Takkeh. Flexible hours and quick earnings.",
        features: [
            Feature {
                title: "Choose when you work - complete flexibility",
                detail: "Work whenever you want - mornings, evenings, weekends. You decide your schedule.",
            },
            Feature {
                title: "In-app navigation & 24/7 support",
                detail: "Built-in GPS navigation and 24/7 driver support for any questions or issues.",
            },
            Feature {
                title: "Track earnings and get instant payouts",
                detail: "See your earnings in real-time and get paid instantly after each trip.",
            },
        ],
        stats: DriverStats {
            active_drivers: "Active Drivers",
            service_areas: "Service Areas",
            driver_rating: "Driver Rating",
        },
        metrics: DriverMetrics {
            potential_earnings: "Potential Earnings",
            per_hour: "Per Hour",
            peak_hours: "Peak Hours",
            weekend_bonus: "Weekend Bonus",
            top_drivers_note: "Top drivers earn over $1,500 per week",
            todays_earnings: "Today's Earnings",
        },
        dashboard: DriverDashboard {
            heading: "Driver Dashboard",
            online: "Online",
            current_route: "Current Route",
            gps_badge: "GPS navigation & earnings tracker",
            trips: "Trips",
        },
        preview_caption: "Driver App Preview",
    },

    screens: [
        Screen {
            title: "Home Screen",
            description: "Browse categories and discover new stores",
        },
        Screen {
            title: "Favorites",
            description: "Save your favorite items and stores",
        },
        Screen {
            title: "Order Tracking",
            description: "Track your orders in real-time",
        },
    ],

    availability: "Now launching in select cities. More locations coming soon.",

    footer: FooterCopy {
        description: "Fast delivery for groceries and food.",
        contact: "Contact Us",
        hours: "Business Hours: 9:00 AM - 6:00 PM",
        legal: "Legal",
        privacy: "Privacy Policy",
        terms: "Terms of Service",
        download_customer: "Download Customer App",
        made_with: "Made with love for fast delivery",
        rights: "All rights reserved.",
    },

    buttons: Buttons {
        download_ios: "Download on App Store",
        download_android: "Get it on Google Play",
    },
};

// ==================== Arabic ====================

pub const AR: Translations = Translations {
    nav: Nav {
        customer: "تطبيق العملاء",
        vendor: "كن بائعاً",
        driver: "كن سائقاً",
    },

    customer: CustomerCopy {
        title: "توصيل بقالة وأكل بسرعة",
        subtitle: "تكة يجلب لك ما تحتاجه في دقائق — بسيط وسريع وموثوق.",
        benefits: [
            "طلب سهل من متاجرك المفضلة",
            "تتبع الطلب المباشر مع التحديثات الفورية",
            "دفع آمن مع خيارات متعددة",
            "دعم عملاء مفيد على مدار الساعة",
        ],
        become_vendor: "كن بائعاً",
        become_driver: "كن سائقاً",
    },

    vendor: VendorCopy {
        title: "كن بائعاً",
        subtitle: "بع البقالة أو الوجبات على تكة. وصل لعملاء أكثر بتطبيق بسيط.",
        features: [
            Feature {
                title: "طلبات فورية مع الإشعارات",
                detail: "احصل على إشعارات فورية بالطلبات الجديدة وادِرها بكفاءة وفي الوقت الفعلي.",
            },
            Feature {
                title: "إدارة سهلة للقائمة والمخزون",
                detail: "حدّث قائمتك، وتتبع المخزون، وادِر متجرك بأدوات قوية.",
            },
            Feature {
                title: "دفعات سريعة وأسعار شفافة",
                detail: "استلم دفعاتك بسرعة مع رسوم شفافة وتحليلات مفصلة.",
            },
        ],
        stats: VendorStats {
            active_vendors: "البائعون النشطون",
            monthly_orders: "الطلبات الشهرية",
            avg_prep_time: "متوسط زمن التحضير",
            avg_prep_value: "15 دقيقة",
            todays_orders: "طلبات اليوم",
        },
        dashboard: VendorDashboard {
            heading: "لوحة تحكم البائع",
            revenue: "الإيرادات",
            rating: "التقييم",
        },
        preview_caption: "معاينة تطبيق البائعين",
        preview_tagline: "لوحة تحكم وتحليلات في الوقت الفعلي",
    },

    driver: DriverCopy {
        title: "كن سائقاً",
        subtitle: "وصل مع تكة. ساعات مرنة وأرباح سريعة.",
        features: [
            Feature {
                title: "اختر متى تعمل - مرونة كاملة",
                detail: "اعمل في أي وقت تريده - صباحاً، مساءً، عطلات نهاية الأسبوع. أنت تحدد جدولك.",
            },
            Feature {
                title: "ملاحة داخل التطبيق ودعم على مدار الساعة",
                detail: "ملاحة مدمجة داخل التطبيق ودعم للسائقين 24/7 لأي استفسارات أو مشاكل.",
            },
            Feature {
                title: "تتبع الأرباح واحصل على دفعات فورية",
                detail: "شاهد أرباحك في الوقت الفعلي واحصل على دفعاتك فوراً بعد كل رحلة.",
            },
        ],
        stats: DriverStats {
            active_drivers: "السائقون النشطون",
            service_areas: "مناطق الخدمة",
            driver_rating: "تقييم السائق",
        },
        metrics: DriverMetrics {
            potential_earnings: "الأرباح المحتملة",
            per_hour: "في الساعة",
            peak_hours: "ساعات الذروة",
            weekend_bonus: "مكافأة نهاية الأسبوع",
            top_drivers_note: "أفضل السائقين يربحون أكثر من 1500$ أسبوعياً",
            todays_earnings: "أرباح اليوم",
        },
        dashboard: DriverDashboard {
            heading: "لوحة تحكم السائق",
            online: "متصل",
            current_route: "المسار الحالي",
            gps_badge: "ملاحة GPS وتتبع الأرباح",
            trips: "الرحلات",
        },
        preview_caption: "معاينة تطبيق السائقين",
    },

    screens: [
        Screen {
            title: "الواجهة الرئيسية",
            description: "تصفح الأقسام واكتشف متاجر جديدة",
        },
        Screen {
            title: "المفضلة",
            description: "احفظ متاجرك وعناصرك المفضلة",
        },
        Screen {
            title: "تتبع الطلب",
            description: "تتبع طلباتك في الوقت الفعلي",
        },
    ],

    availability: "يتم الإطلاق الآن في مدن مختارة. المزيد من المواقع قريباً.",

    footer: FooterCopy {
        description: "توصيل سريع للبقالة والطعام.",
        contact: "اتصل بنا",
        hours: "ساعات العمل: 9:00 صباحاً - 6:00 مساءً",
        legal: "قانوني",
        privacy: "سياسة الخصوصية",
        terms: "شروط الخدمة",
        download_customer: "حمل تطبيق العملاء",
        made_with: "صنع بحب للتوصيل السريع",
        rights: "جميع الحقوق محفوظة.",
    },

    buttons: Buttons {
        download_ios: "حمل من متجر التطبيقات",
        download_android: "احصل عليه من جوجل بلاي",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    /// Flatten every leaf string of a table, in schema order.
    fn inventory(t: &Translations) -> Vec<&'static str> {
        let mut out = vec![t.nav.customer, t.nav.vendor, t.nav.driver];

        out.extend([t.customer.title, t.customer.subtitle]);
        out.extend(t.customer.benefits);
        out.extend([t.customer.become_vendor, t.customer.become_driver]);

        out.extend([t.vendor.title, t.vendor.subtitle]);
        for f in &t.vendor.features {
            out.extend([f.title, f.detail]);
        }
        out.extend([
            t.vendor.stats.active_vendors,
            t.vendor.stats.monthly_orders,
            t.vendor.stats.avg_prep_time,
            t.vendor.stats.avg_prep_value,
            t.vendor.stats.todays_orders,
            t.vendor.dashboard.heading,
            t.vendor.dashboard.revenue,
            t.vendor.dashboard.rating,
            t.vendor.preview_caption,
            t.vendor.preview_tagline,
        ]);

        out.extend([t.driver.title, t.driver.subtitle]);
        for f in &t.driver.features {
            out.extend([f.title, f.detail]);
        }
        out.extend([
            t.driver.stats.active_drivers,
            t.driver.stats.service_areas,
            t.driver.stats.driver_rating,
            t.driver.metrics.potential_earnings,
            t.driver.metrics.per_hour,
            t.driver.metrics.peak_hours,
            t.driver.metrics.weekend_bonus,
            t.driver.metrics.top_drivers_note,
            t.driver.metrics.todays_earnings,
            t.driver.dashboard.heading,
            t.driver.dashboard.online,
            t.driver.dashboard.current_route,
            t.driver.dashboard.gps_badge,
            t.driver.dashboard.trips,
            t.driver.preview_caption,
        ]);

        for s in &t.screens {
            out.extend([s.title, s.description]);
        }

        out.push(t.availability);
        out.extend([
            t.footer.description,
            t.footer.contact,
            t.footer.hours,
            t.footer.legal,
            t.footer.privacy,
            t.footer.terms,
            t.footer.download_customer,
            t.footer.made_with,
            t.footer.rights,
        ]);
        out.extend([t.buttons.download_ios, t.buttons.download_android]);

        out
    }

    #[test]
    fn no_table_has_empty_strings() {
        for (name, table) in [("en", &EN), ("ar", &AR)] {
            for (i, s) in inventory(table).iter().enumerate() {
                assert!(
                    !s.trim().is_empty(),
                    "{} table has an empty string at flat index {}",
                    name,
                    i
                );
            }
        }
    }

    #[test]
    fn tables_cover_the_same_schema() {
        // Same leaf count by construction; this guards the test helper itself
        // against drifting between tables.
        assert_eq!(inventory(&EN).len(), inventory(&AR).len());
    }

    #[test]
    fn tables_are_actually_translated() {
        let en = inventory(&EN);
        let ar = inventory(&AR);
        let differing = en.iter().zip(&ar).filter(|(a, b)| a != b).count();
        // Almost every leaf should differ between languages; a handful of
        // shared figures ("15min" vs "15 دقيقة" still differ) keeps this
        // strictly below the total but well above zero.
        assert!(
            differing > en.len() / 2,
            "only {} of {} leaves differ between en and ar",
            differing,
            en.len()
        );
    }

    #[test]
    fn arabic_table_contains_arabic_script() {
        let ar = inventory(&AR);
        let arabic_leaves = ar
            .iter()
            .filter(|s| s.chars().any(|c| ('\u{0600}'..='\u{06FF}').contains(&c)))
            .count();
        assert!(arabic_leaves > ar.len() / 2);
    }

    #[test]
    fn screen_entries_match_the_accordion() {
        assert_eq!(EN.screens.len(), 3);
        assert_eq!(AR.screens.len(), 3);
        assert_eq!(EN.screens[0].title, "Home Screen");
        assert_eq!(EN.screens[2].title, "Order Tracking");
    }
}
