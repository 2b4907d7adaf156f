use yew::prelude::*;
use yew_router::prelude::*;
use crate::config;
use crate::Route;

#[function_component(LegalLinks)]
fn legal_links() -> Html {
    html! {
        <div class="legal-links">
            <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
            {" | "}
            <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-content privacy-policy">
            <h1>{"Privacy Policy"}</h1>

            <section>
                <h2>{"1. What We Collect"}</h2>
                <p>{"We only collect what you type into our forms:"}</p>
                <ul>
                    <li>{"Your name, email address and, if you give it, your phone number"}</li>
                    <li>{"Your answers to our planning questionnaire"}</li>
                    <li>{"The message or notes you send with a contact or call request"}</li>
                    <li>{"The webinar session you register for"}</li>
                </ul>
            </section>

            <section>
                <h2>{"2. How We Use It"}</h2>
                <ul>
                    <li>{"To reply to your enquiry and arrange calls"}</li>
                    <li>{"To send webinar joining details and reminders"}</li>
                    <li>{"To prepare the advisor for a first conversation with you"}</li>
                </ul>
                <p>{"We do not sell your information and we do not use it for advertising."}</p>
            </section>

            <section>
                <h2>{"3. Where It Goes"}</h2>
                <p>{"Form submissions are passed through our server to the workflow system our office uses to track enquiries. Each submission is stamped with the time it was received. Nothing is stored in your browser beyond what the page needs while it is open."}</p>
            </section>

            <section>
                <h2>{"4. Your Rights"}</h2>
                <p>{"You can ask us at any time to:"}</p>
                <ul>
                    <li>{"Show you what we hold about you"}</li>
                    <li>{"Correct anything that is wrong"}</li>
                    <li>{"Delete your details, unless we must keep them for a client file"}</li>
                </ul>
            </section>

            <section>
                <h2>{"5. Contact"}</h2>
                <p>
                    {"For privacy questions, email "}
                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{ config::CONTACT_EMAIL }</a>
                </p>
            </section>
            <LegalLinks />
        </div>
    }
}

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions() -> Html {
    html! {
        <div class="legal-content terms-and-conditions">
            <h1>{format!("{} Terms of Service", config::SITE_NAME)}</h1>

            <section>
                <h2>{"1. Introduction"}</h2>
                <p>{format!("These terms govern your use of the {} website. By using the site you agree to them.", config::SITE_NAME)}</p>
            </section>

            <section>
                <h2>{"2. No Legal Advice Through This Site"}</h2>
                <p>{"Articles, webinars and questionnaire results are general information. They are not legal, tax or financial advice for your situation, and reading them does not create an advisor-client relationship. That relationship begins only when we both sign an engagement letter."}</p>
            </section>

            <section>
                <h2>{"3. Webinars and Calls"}</h2>
                <ul>
                    <li>{"Webinars and introductory calls are free of charge."}</li>
                    <li>{"We may reschedule or cancel a session; registered attendees are told by email."}</li>
                    <li>{"Recording a call requires the agreement of everyone on it."}</li>
                </ul>
            </section>

            <section>
                <h2>{"4. Acceptable Use"}</h2>
                <p>{"Do not submit information about other people without their permission, and do not use the forms to send anything unlawful or abusive."}</p>
            </section>

            <section>
                <h2>{"5. Intellectual Property"}</h2>
                <p>{"The content of this site, including articles, checklists and webinar material, belongs to us. You may share links to it and print it for personal use."}</p>
            </section>

            <section>
                <h2>{"6. Limitation of Liability"}</h2>
                <p>{"The site is provided \"as is\". We are not liable for decisions made on the strength of its general content alone."}</p>
            </section>

            <section>
                <h2>{"7. Changes"}</h2>
                <p>{"We may update these terms. Continued use of the site after a change means you accept the new version."}</p>
            </section>

            <section>
                <h2>{"8. Contact Us"}</h2>
                <p>
                    {"Questions about these terms can go to "}
                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{ config::CONTACT_EMAIL }</a>
                </p>
            </section>
            <LegalLinks />
        </div>
    }
}
