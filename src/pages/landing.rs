//! The single marketing page: header, the three audience sections, footer.
//!
//! Deliberately router-free so it can be rendered under a bare language
//! provider, server-side included.

use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::sections::customer::CustomerSection;
use crate::sections::driver::DriverSection;
use crate::sections::vendor::VendorSection;

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <>
            <Header />
            <main>
                <CustomerSection />
                <VendorSection />
                <DriverSection />
            </main>
            <Footer />
        </>
    }
}
