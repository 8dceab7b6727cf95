//! Fixed presentation bundles per risk level.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentationBundle {
    /// Class added to the risk display container
    pub style_class: &'static str,
    /// Font Awesome icon and colour classes
    pub icon_class: &'static str,
    /// Advisory items, rendered in order
    pub recommendations: &'static [&'static str],
}

pub const LOW_BUNDLE: PresentationBundle = PresentationBundle {
    style_class: "risk-low",
    icon_class: "fa-heart text-green-600",
    recommendations: &[
        "Pertahankan gaya hidup sehat Anda",
        "Lakukan olahraga teratur minimal 30 menit per hari",
        "Konsumsi makanan bergizi seimbang",
        "Check-up kesehatan rutin setahun sekali",
        "Hindari stres berlebihan",
    ],
};

pub const MEDIUM_BUNDLE: PresentationBundle = PresentationBundle {
    style_class: "risk-medium",
    icon_class: "fa-heart text-yellow-600",
    recommendations: &[
        "Konsultasi dengan dokter untuk pemeriksaan lebih lanjut",
        "Tingkatkan aktivitas fisik menjadi 5x seminggu",
        "Kurangi konsumsi makanan tinggi lemak dan garam",
        "Monitor tekanan darah dan kolesterol secara berkala",
        "Pertimbangkan untuk berhenti merokok jika merokok",
        "Kelola stres dengan baik",
    ],
};

pub const HIGH_BUNDLE: PresentationBundle = PresentationBundle {
    style_class: "risk-high",
    icon_class: "fa-heart-crack text-orange-600",
    recommendations: &[
        "⚠️ Segera konsultasi dengan dokter spesialis jantung",
        "Lakukan pemeriksaan kardiovaskular lengkap",
        "Ubah pola makan dengan diet rendah garam dan lemak jenuh",
        "Hindari aktivitas berat tanpa supervisi medis",
        "Berhenti merokok segera",
        "Monitor kesehatan harian secara ketat",
        "Pertimbangkan terapi medis sesuai anjuran dokter",
    ],
};
