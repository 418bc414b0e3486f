pub mod cha2ds2_vasc;
pub mod gcs;
pub mod pmr;
pub mod rcc;
pub mod wells_dvt;
